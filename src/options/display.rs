use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;

/// Visualization style for a protein view.
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
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Secondary-structure cartoon (helix spirals, sheet ribbons, loops).
    #[default]
    Cartoon,
    /// Scaled atom spheres joined by bond cylinders.
    BallAndStick,
    /// Full-radius atom spheres.
    SpaceFilling,
    /// Translucent placeholder surface.
    Surface,
}

impl ViewMode {
    /// Every mode, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Cartoon,
        Self::BallAndStick,
        Self::SpaceFilling,
        Self::Surface,
    ];

    /// Kebab-case name, also used in export filenames.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cartoon => "cartoon",
            Self::BallAndStick => "ball-and-stick",
            Self::SpaceFilling => "space-filling",
            Self::Surface => "surface",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown view mode \"{s}\""))
    }
}

/// Render quality, mapped to a tessellation detail count.
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
pub enum Quality {
    /// Coarse spheres.
    Low,
    /// The default.
    #[default]
    Medium,
    /// Fine spheres.
    High,
}

impl Quality {
    /// Sphere segment count for protein atoms.
    #[must_use]
    pub const fn protein_detail(self) -> u32 {
        match self {
            Self::Low => 5,
            Self::Medium => 10,
            Self::High => 15,
        }
    }

    /// Sphere segment count for small-molecule atoms.
    #[must_use]
    pub const fn molecule_segments(self) -> u32 {
        match self {
            Self::Low => 16,
            Self::Medium => 32,
            Self::High => 64,
        }
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown quality \"{s}\"")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles, visualization mode and coloring selection.
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayOptions {
    /// Visualization style.
    #[schemars(title = "Mode")]
    pub mode: ViewMode,
    /// Coloring scheme.
    #[schemars(title = "Color Scheme")]
    pub color_scheme: ColorScheme,
    /// Tessellation detail.
    #[schemars(title = "Quality")]
    pub quality: Quality,
    /// Whether to render hydrogen atoms.
    #[schemars(title = "Show Hydrogens")]
    pub show_hydrogens: bool,
    /// Whether to render water molecules.
    #[schemars(title = "Show Water")]
    pub show_water: bool,
    /// Whether to render amino acid side chains.
    #[schemars(title = "Show Side Chains")]
    pub show_side_chains: bool,
    /// Whether to add the axes helper and grid.
    #[schemars(title = "Show Axes")]
    pub show_axes: bool,
    /// Whether to report scene statistics.
    #[schemars(title = "Show Stats")]
    pub show_stats: bool,
    /// Whether the model spins each frame.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Multiplier on atom sphere radii.
    #[schemars(title = "Atom Size", range(min = 0.5, max = 2.0), extend("step" = 0.1))]
    pub atom_scale: f32,
    /// Multiplier on bond cylinder radii.
    #[schemars(title = "Bond Size", range(min = 0.5, max = 2.0), extend("step" = 0.1))]
    pub bond_scale: f32,
    /// Draw a random temperature factor for atoms that carry none.
    #[schemars(skip)]
    pub random_b_factor_fallback: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            color_scheme: ColorScheme::default(),
            quality: Quality::default(),
            show_hydrogens: false,
            show_water: false,
            show_side_chains: false,
            show_axes: false,
            show_stats: false,
            auto_rotate: false,
            atom_scale: 1.0,
            bond_scale: 1.0,
            random_b_factor_fallback: false,
        }
    }
}

impl DisplayOptions {
    /// Atom scale clamped to the supported slider range.
    #[must_use]
    pub fn clamped_atom_scale(&self) -> f32 {
        self.atom_scale.clamp(0.5, 2.0)
    }

    /// Bond scale clamped to the supported slider range.
    #[must_use]
    pub fn clamped_bond_scale(&self) -> f32 {
        self.bond_scale.clamp(0.5, 2.0)
    }
}
