use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named image-based-lighting environments.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// `sunset`.
    Sunset,
    /// `dawn`.
    Dawn,
    /// `night`.
    Night,
    /// `warehouse`.
    Warehouse,
    /// `forest`.
    Forest,
    /// `apartment`.
    Apartment,
    /// `studio`.
    Studio,
    /// `city`, the default.
    #[default]
    City,
    /// `park`.
    Park,
    /// `lobby`.
    Lobby,
}

impl Environment {
    /// Every preset, in menu order.
    pub const ALL: [Self; 10] = [
        Self::Sunset,
        Self::Dawn,
        Self::Night,
        Self::Warehouse,
        Self::Forest,
        Self::Apartment,
        Self::Studio,
        Self::City,
        Self::Park,
        Self::Lobby,
    ];

    /// Lower-case preset name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunset => "sunset",
            Self::Dawn => "dawn",
            Self::Night => "night",
            Self::Warehouse => "warehouse",
            Self::Forest => "forest",
            Self::Apartment => "apartment",
            Self::Studio => "studio",
            Self::City => "city",
            Self::Park => "park",
            Self::Lobby => "lobby",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown environment \"{s}\""))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Scene light parameters.
pub struct LightingOptions {
    /// Master intensity; the point light uses it directly.
    #[schemars(title = "Light Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.1))]
    pub intensity: f32,
    /// Ambient light as a fraction of `intensity`.
    #[schemars(skip)]
    pub ambient_ratio: f32,
    /// Point light position.
    #[schemars(skip)]
    pub point_light_position: [f32; 3],
    /// Environment map preset.
    #[schemars(title = "Environment")]
    pub environment: Environment,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            ambient_ratio: 0.5,
            point_light_position: [10.0, 10.0, 10.0],
            environment: Environment::default(),
        }
    }
}

impl LightingOptions {
    /// Ambient light intensity.
    #[must_use]
    pub fn ambient_intensity(&self) -> f32 {
        self.intensity * self.ambient_ratio
    }
}
