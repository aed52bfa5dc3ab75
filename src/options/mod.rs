//! Centralized view options with TOML preset support.
//!
//! Every tweakable setting (display toggles, geometry constants, lighting,
//! camera, sample store) is consolidated here. Options serialize to/from
//! TOML so a view can be saved as a preset and reloaded later.

mod camera;
mod display;
mod geometry;
mod lighting;
mod store;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::{DisplayOptions, Quality, ViewMode};
pub use geometry::GeometryOptions;
pub use lighting::{Environment, LightingOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use store::StoreOptions;

use crate::error::MolscopeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Display toggles, mode and coloring.
    pub display: DisplayOptions,
    /// Shape constants for generated primitives.
    pub geometry: GeometryOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Sample store behaviour.
    #[schemars(skip)]
    pub store: StoreOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MolscopeError> {
        let content =
            std::fs::read_to_string(path).map_err(MolscopeError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, MolscopeError> {
        toml::from_str(content)
            .map_err(|e| MolscopeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MolscopeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolscopeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolscopeError::Io)?;
        }
        std::fs::write(path, content).map_err(MolscopeError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[display]
mode = "ball-and-stick"
color_scheme = "residueType"

[lighting]
intensity = 1.5
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.display.mode, ViewMode::BallAndStick);
        assert_eq!(opts.display.color_scheme, ColorScheme::ResidueType);
        assert_eq!(opts.lighting.intensity, 1.5);
        assert_eq!(opts.lighting.ambient_intensity(), 0.75);
        // Everything else should be default
        assert_eq!(opts.geometry.helix_radius, 1.5);
        assert_eq!(opts.store.fetch_delay_ms, 1500);
        assert!(!opts.display.show_hydrogens);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[display]\nmode = 3").unwrap_err();
        assert!(matches!(err, MolscopeError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("bright.toml");
        let mut opts = Options::default();
        opts.lighting.intensity = 2.0;
        opts.display.quality = Quality::High;
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(
            Options::list_presets(&dir.path().join("presets")),
            ["bright"]
        );
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Options::list_presets(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn quality_detail_counts() {
        assert_eq!(Quality::Low.protein_detail(), 5);
        assert_eq!(Quality::Medium.protein_detail(), 10);
        assert_eq!(Quality::High.protein_detail(), 15);
        assert_eq!(Quality::Low.molecule_segments(), 16);
        assert_eq!(Quality::High.molecule_segments(), 64);
    }

    #[test]
    fn view_mode_names_parse() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.name().parse(), Ok(mode));
        }
        assert_eq!("space_filling".parse(), Ok(ViewMode::SpaceFilling));
        assert!("wireframe".parse::<ViewMode>().is_err());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("store"));

        let lighting = &props["lighting"]["properties"];
        assert!(lighting.get("intensity").is_some());
        assert!(lighting.get("point_light_position").is_none());
    }
}
