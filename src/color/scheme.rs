use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::palette::{self, NEUTRAL_GRAY};
use super::{Color, ColorRamp};
use crate::secondary_structure::SSType;

/// Temperature factors at or above this value map to the hot end of the
/// ramp.
const B_FACTOR_CEILING: f32 = 100.0;

/// Named coloring schemes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    /// Cycle the chain palette by chain identifier.
    #[default]
    ChainId,
    /// Element (CPK) colors.
    Cpk,
    /// Per-residue-type colors.
    ResidueType,
    /// Helix / sheet / loop colors.
    SecondaryStructure,
    /// Hydrophobic / hydrophilic / neutral.
    Hydrophobicity,
    /// Positive / negative / neutral side chains.
    Charge,
    /// Temperature factor mapped blue → red.
    BFactor,
}

impl ColorScheme {
    /// Every scheme, in menu order.
    pub const ALL: [Self; 7] = [
        Self::ChainId,
        Self::Cpk,
        Self::ResidueType,
        Self::SecondaryStructure,
        Self::Hydrophobicity,
        Self::Charge,
        Self::BFactor,
    ];

    /// Wire name, e.g. `"chainId"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChainId => "chainId",
            Self::Cpk => "cpk",
            Self::ResidueType => "residueType",
            Self::SecondaryStructure => "secondaryStructure",
            Self::Hydrophobicity => "hydrophobicity",
            Self::Charge => "charge",
            Self::BFactor => "bFactor",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color scheme \"{s}\""))
    }
}

/// What a scheme may look at when coloring one entity. Every field is
/// optional; a scheme whose key is missing yields neutral gray.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorTarget<'a> {
    /// Element symbol.
    pub element: Option<&'a str>,
    /// Three-letter residue code.
    pub residue_name: Option<&'a str>,
    /// Chain identifier.
    pub chain_id: Option<&'a str>,
    /// Secondary-structure class.
    pub ss: Option<SSType>,
    /// Temperature factor.
    pub b_factor: Option<f32>,
}

impl<'a> ColorTarget<'a> {
    /// Target describing a whole chain.
    #[must_use]
    pub fn chain(chain_id: &'a str) -> Self {
        Self {
            chain_id: Some(chain_id),
            ..Self::default()
        }
    }

    /// Target describing a bare element.
    #[must_use]
    pub fn element(symbol: &'a str) -> Self {
        Self {
            element: Some(symbol),
            ..Self::default()
        }
    }
}

/// Resolves [`ColorTarget`]s to colors under one scheme.
///
/// Deterministic unless `random_b_factor_fallback` is set, in which case a
/// target without a temperature factor draws a random one, mimicking a demo
/// display with no real B-factor data.
#[derive(Debug, Clone, Default)]
pub struct ColorResolver {
    scheme: Option<ColorScheme>,
    random_b_factor_fallback: bool,
    ramp: ColorRamp,
}

impl ColorResolver {
    /// Resolver for a known scheme.
    #[must_use]
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Some(scheme),
            ..Self::default()
        }
    }

    /// Resolver for a scheme given by name. Unknown names produce a
    /// resolver that always answers neutral gray.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let scheme = name.parse().ok();
        if scheme.is_none() {
            log::debug!("unknown color scheme {name:?}, using neutral gray");
        }
        Self {
            scheme,
            ..Self::default()
        }
    }

    /// Enable the random temperature-factor fallback.
    #[must_use]
    pub fn with_random_b_factor_fallback(mut self, enabled: bool) -> Self {
        self.random_b_factor_fallback = enabled;
        self
    }

    /// The active scheme, `None` for an unrecognised name.
    #[must_use]
    pub fn scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    /// Color for `target` under the active scheme.
    #[must_use]
    pub fn resolve(&self, target: &ColorTarget<'_>) -> Color {
        let Some(scheme) = self.scheme else {
            return NEUTRAL_GRAY;
        };
        match scheme {
            ColorScheme::ChainId => {
                target.chain_id.map_or(NEUTRAL_GRAY, palette::chain_color)
            }
            ColorScheme::Cpk => {
                target.element.map_or(NEUTRAL_GRAY, palette::element_color)
            }
            ColorScheme::ResidueType => target
                .residue_name
                .map_or(NEUTRAL_GRAY, palette::residue_color),
            ColorScheme::SecondaryStructure => {
                target.ss.map_or(NEUTRAL_GRAY, palette::ss_color)
            }
            ColorScheme::Hydrophobicity => target
                .residue_name
                .map_or(NEUTRAL_GRAY, palette::hydrophobicity_color),
            ColorScheme::Charge => target
                .residue_name
                .map_or(NEUTRAL_GRAY, palette::charge_color),
            ColorScheme::BFactor => self.b_factor_color(target.b_factor),
        }
    }

    fn b_factor_color(&self, b_factor: Option<f32>) -> Color {
        let value = match b_factor {
            Some(v) if v.is_finite() => v,
            Some(_) => return NEUTRAL_GRAY,
            None if self.random_b_factor_fallback => {
                rand::random::<f32>() * B_FACTOR_CEILING
            }
            None => return NEUTRAL_GRAY,
        };
        self.ramp.color(value / B_FACTOR_CEILING)
    }
}

/// One-shot helper: color `target` under the scheme called `scheme_name`.
#[must_use]
pub fn color_by_name(target: &ColorTarget<'_>, scheme_name: &str) -> Color {
    ColorResolver::from_name(scheme_name).resolve(target)
}
