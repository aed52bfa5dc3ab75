//! Display colors and the coloring schemes that assign them.
//!
//! All lookup tables live in [`palette`]; [`scheme`] resolves an entity to a
//! color under one of the named schemes, falling back to
//! [`palette::NEUTRAL_GRAY`] for anything it does not recognise.

pub mod palette;
mod ramp;
mod scheme;

use std::fmt;
use std::str::FromStr;

pub use ramp::ColorRamp;
pub use scheme::{color_by_name, ColorResolver, ColorScheme, ColorTarget};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque 8-bit RGB color, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color from a packed `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Color from unit-range channels; each is clamped to [0, 1] and
    /// floored to 8 bits.
    #[must_use]
    pub fn from_unit(rgb: [f32; 3]) -> Self {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).floor() as u8;
        Self::rgb(q(rgb[0]), q(rgb[1]), q(rgb[2]))
    }

    /// Channels as unit-range floats, for vertex and instance data.
    #[must_use]
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    /// Upper-case `#RRGGBB` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Error parsing a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color \"{}\"", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ParseColorError(s.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::hex)
            .map_err(|_| ParseColorError(s.to_owned()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c: Color = "#3050f8".parse().unwrap();
        assert_eq!(c, Color::rgb(0x30, 0x50, 0xF8));
        assert_eq!(c.to_hex(), "#3050F8");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn unit_conversion_floors() {
        assert_eq!(Color::from_unit([0.5, 0.0, 1.0]), Color::rgb(127, 0, 255));
        assert_eq!(Color::from_unit([-1.0, 2.0, 0.0]), Color::rgb(0, 255, 0));
        assert_eq!(Color::rgb(255, 0, 0).to_unit(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::hex(0xFF0D0D)).unwrap();
        assert_eq!(json, "\"#FF0D0D\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::hex(0xFF0D0D));
    }
}
