use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Store", inline)]
#[serde(default)]
/// Sample structure store behaviour.
pub struct StoreOptions {
    /// Simulated network delay before an unknown identifier is reported.
    pub fetch_delay_ms: u64,
    /// Seed for generated sample residue types.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 1500,
            seed: 0x6d6f_6c73,
        }
    }
}

impl StoreOptions {
    /// Fetch delay as a [`Duration`].
    #[must_use]
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}
