//! Built-in structure data: sample proteins, the periodic table, molecule
//! presets and residue bond topology.
//!
//! [`StructureStore`] is the only data source the viewer has. Lookups are
//! case-insensitive; an unknown identifier costs a simulated network delay
//! before it is reported.

pub mod elements;
mod generators;
pub mod presets;
mod samples;
pub mod topology;

pub use samples::SAMPLE_IDS;

use crate::error::MolscopeError;
use crate::options::StoreOptions;
use crate::structure::Protein;

/// Identifiers suggested when a lookup fails, in suggestion order.
const SUGGESTED_IDS: [&str; 8] = [
    "1cbn", "1ubq", "3eiy", "1hho", "1gfl", "4ins", "1bkv", "6vxx",
];

/// Sample proteins keyed by identifier.
#[derive(Debug, Clone)]
pub struct StructureStore {
    entries: Vec<(&'static str, Protein)>,
    options: StoreOptions,
}

impl Default for StructureStore {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}

impl StructureStore {
    /// Build every sample with the configured seed.
    #[must_use]
    pub fn new(options: StoreOptions) -> Self {
        let entries = samples::build_samples(options.seed);
        log::debug!("structure store ready with {} samples", entries.len());
        Self { entries, options }
    }

    /// Identifiers in menu order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// `(identifier, display name)` pairs in menu order.
    pub fn names(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(id, p)| (*id, p.name.as_deref().unwrap_or(id)))
    }

    /// Immediate lookup; `id` is trimmed and matched case-insensitively.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Protein> {
        let id = id.trim();
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id))
            .map(|(_, protein)| protein)
    }

    /// Canonical (lower-case) form of a known identifier.
    #[must_use]
    pub fn canonical_id(&self, id: &str) -> Option<&'static str> {
        let id = id.trim();
        self.ids().find(|key| key.eq_ignore_ascii_case(id))
    }

    /// Look a structure up the way a remote fetch would.
    ///
    /// Known identifiers resolve immediately. Unknown ones block for the
    /// configured delay, then fail with [`MolscopeError::UnknownStructure`].
    /// A blank identifier fails at once.
    pub fn fetch(&self, id: &str) -> Result<&Protein, MolscopeError> {
        let trimmed = id.trim();
        if let Some(protein) = self.get(trimmed) {
            log::info!("loaded structure {trimmed}");
            return Ok(protein);
        }
        if !trimmed.is_empty() {
            std::thread::sleep(self.options.fetch_delay());
            log::warn!("structure {trimmed} is not in the sample store");
        }
        Err(MolscopeError::UnknownStructure {
            id: trimmed.to_owned(),
            known: SUGGESTED_IDS.iter().map(|s| (*s).to_owned()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn fast_store() -> StructureStore {
        StructureStore::new(StoreOptions {
            fetch_delay_ms: 20,
            ..StoreOptions::default()
        })
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let store = fast_store();
        assert!(store.get("1CBN").is_some());
        assert!(store.get("  1ubq ").is_some());
        assert_eq!(store.canonical_id(" 6VXX"), Some("6vxx"));
        assert!(store.get("9xyz").is_none());
    }

    #[test]
    fn menu_order() {
        let store = fast_store();
        assert_eq!(store.ids().collect::<Vec<_>>(), SAMPLE_IDS);
        let names: Vec<_> = store.names().take(2).collect();
        assert_eq!(names, [("1cbn", "Crambin"), ("1hho", "Hemoglobin")]);
    }

    #[test]
    fn known_fetch_is_immediate() {
        let store = StructureStore::default();
        let start = Instant::now();
        let protein = store.fetch("1Ubq").unwrap();
        assert_eq!(protein.name.as_deref(), Some("Ubiquitin"));
        assert!(start.elapsed() < Duration::from_millis(1000));
    }

    #[test]
    fn unknown_fetch_waits_then_fails() {
        let store = fast_store();
        let start = Instant::now();
        let err = store.fetch("9xyz").unwrap_err();
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(
            err.to_string(),
            "Protein with PDB ID \"9xyz\" not found. Try 1cbn, 1ubq, 3eiy, \
             1hho, 1gfl, 4ins, 1bkv, or 6vxx."
        );
    }

    #[test]
    fn blank_fetch_fails_without_delay() {
        let store = StructureStore::default();
        let start = Instant::now();
        assert!(store.fetch("   ").is_err());
        assert!(start.elapsed() < Duration::from_millis(1000));
    }
}
