//! Canonical color tables.
//!
//! One table per category (element, residue, secondary structure,
//! hydrophobicity, charge, chain palette). Every consumer, scheme resolver
//! and info panel alike, reads from here.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::Color;
use crate::secondary_structure::SSType;

/// Fallback for unknown keys and unknown schemes.
pub const NEUTRAL_GRAY: Color = Color::hex(0xCCCCCC);

/// Bond cylinders are always this color, whatever the scheme.
pub const BOND_GRAY: Color = Color::hex(0xCCCCCC);

/// Chain palette, cycled by chain index.
pub const CHAIN_PALETTE: [Color; 10] = [
    Color::hex(0x3498DB), // blue
    Color::hex(0x2ECC71), // green
    Color::hex(0xE74C3C), // red
    Color::hex(0xF39C12), // orange
    Color::hex(0x9B59B6), // purple
    Color::hex(0x1ABC9C), // teal
    Color::hex(0xD35400), // dark orange
    Color::hex(0xC0392B), // dark red
    Color::hex(0x16A085), // dark teal
    Color::hex(0x8E44AD), // dark purple
];

/// CPK colors keyed by upper-case element symbol.
const ELEMENT_COLORS: &[(&str, Color)] = &[
    ("H", Color::hex(0xFFFFFF)),
    ("C", Color::hex(0x909090)),
    ("N", Color::hex(0x3050F8)),
    ("O", Color::hex(0xFF0D0D)),
    ("S", Color::hex(0xFFFF30)),
    ("P", Color::hex(0xFF8000)),
    ("F", Color::hex(0x90E050)),
    ("CL", Color::hex(0x1FF01F)),
    ("BR", Color::hex(0xA62929)),
    ("I", Color::hex(0x940094)),
    ("NA", Color::hex(0xAB5CF2)),
    ("MG", Color::hex(0x8AFF00)),
    ("CA", Color::hex(0x3DFF00)),
    ("MN", Color::hex(0x9C7AC7)),
    ("FE", Color::hex(0xE06633)),
    ("ZN", Color::hex(0x7D80B0)),
];

/// Residue-type colors keyed by three-letter code.
const RESIDUE_COLORS: &[(&str, Color)] = &[
    ("ALA", Color::hex(0xC8C8C8)),
    ("ARG", Color::hex(0x145AFF)),
    ("ASN", Color::hex(0x00DCDC)),
    ("ASP", Color::hex(0xE60A0A)),
    ("CYS", Color::hex(0xE6E600)),
    ("GLN", Color::hex(0x00DCDC)),
    ("GLU", Color::hex(0xE60A0A)),
    ("GLY", Color::hex(0xEBEBEB)),
    ("HIS", Color::hex(0x8282D2)),
    ("ILE", Color::hex(0x0F820F)),
    ("LEU", Color::hex(0x0F820F)),
    ("LYS", Color::hex(0x145AFF)),
    ("MET", Color::hex(0xE6E600)),
    ("PHE", Color::hex(0x3232AA)),
    ("PRO", Color::hex(0xDC9682)),
    ("SER", Color::hex(0xFA9600)),
    ("THR", Color::hex(0xFA9600)),
    ("TRP", Color::hex(0xB45AB4)),
    ("TYR", Color::hex(0x3232AA)),
    ("VAL", Color::hex(0x0F820F)),
    ("HYP", Color::hex(0xDC9682)),
];

const HYDROPHOBIC: Color = Color::hex(0xFF0000);
const HYDROPHILIC: Color = Color::hex(0x0000FF);

/// Kyte-Doolittle style three-way split: hydrophobic, hydrophilic, neutral.
const HYDROPHOBICITY_COLORS: &[(&str, Color)] = &[
    ("ALA", HYDROPHOBIC),
    ("ARG", HYDROPHILIC),
    ("ASN", HYDROPHILIC),
    ("ASP", HYDROPHILIC),
    ("CYS", HYDROPHOBIC),
    ("GLN", HYDROPHILIC),
    ("GLU", HYDROPHILIC),
    ("GLY", Color::hex(0xFFFFFF)),
    ("HIS", HYDROPHILIC),
    ("ILE", HYDROPHOBIC),
    ("LEU", HYDROPHOBIC),
    ("LYS", HYDROPHILIC),
    ("MET", HYDROPHOBIC),
    ("PHE", HYDROPHOBIC),
    ("PRO", Color::hex(0xFFFF00)),
    ("SER", HYDROPHILIC),
    ("THR", HYDROPHILIC),
    ("TRP", HYDROPHOBIC),
    ("TYR", HYDROPHOBIC),
    ("VAL", HYDROPHOBIC),
];

/// Side-chain charge at neutral pH; everything absent is neutral gray.
const CHARGE_COLORS: &[(&str, Color)] = &[
    ("ARG", Color::hex(0x0000FF)),
    ("LYS", Color::hex(0x0000FF)),
    ("HIS", Color::hex(0x8080FF)),
    ("ASP", Color::hex(0xFF0000)),
    ("GLU", Color::hex(0xFF0000)),
];

struct Tables {
    element: FxHashMap<&'static str, Color>,
    residue: FxHashMap<&'static str, Color>,
    hydrophobicity: FxHashMap<&'static str, Color>,
    charge: FxHashMap<&'static str, Color>,
}

fn index(entries: &[(&'static str, Color)]) -> FxHashMap<&'static str, Color> {
    entries.iter().copied().collect()
}

static TABLES: LazyLock<Tables> = LazyLock::new(|| Tables {
    element: index(ELEMENT_COLORS),
    residue: index(RESIDUE_COLORS),
    hydrophobicity: index(HYDROPHOBICITY_COLORS),
    charge: index(CHARGE_COLORS),
});

/// CPK color for an element symbol (case-insensitive), or neutral gray.
#[must_use]
pub fn element_color(symbol: &str) -> Color {
    let key = symbol.trim().to_ascii_uppercase();
    TABLES
        .element
        .get(key.as_str())
        .copied()
        .unwrap_or(NEUTRAL_GRAY)
}

/// Residue-type color for a three-letter code, or neutral gray.
#[must_use]
pub fn residue_color(code: &str) -> Color {
    TABLES
        .residue
        .get(code.trim())
        .copied()
        .unwrap_or(NEUTRAL_GRAY)
}

/// Hydrophobicity color for a three-letter code, or neutral gray.
#[must_use]
pub fn hydrophobicity_color(code: &str) -> Color {
    TABLES
        .hydrophobicity
        .get(code.trim())
        .copied()
        .unwrap_or(NEUTRAL_GRAY)
}

/// Charge color for a three-letter code; uncharged residues are gray.
#[must_use]
pub fn charge_color(code: &str) -> Color {
    TABLES
        .charge
        .get(code.trim())
        .copied()
        .unwrap_or(NEUTRAL_GRAY)
}

/// Secondary-structure color: red helix, yellow sheet, sky-blue loop.
#[must_use]
pub const fn ss_color(ss: SSType) -> Color {
    match ss {
        SSType::Helix => Color::hex(0xFF0000),
        SSType::Sheet => Color::hex(0xFFFF00),
        SSType::Loop => Color::hex(0x00BFFF),
    }
}

/// Palette index for a chain identifier.
///
/// Numeric identifiers use their value; anything else uses the character
/// code of its first character. Both wrap modulo the palette size. Zero is
/// a numeric value like any other, so `"0"` maps to index 0 rather than
/// falling through to its character code.
#[must_use]
pub fn chain_palette_index(chain_id: &str) -> usize {
    let id = chain_id.trim();
    let n = CHAIN_PALETTE.len();
    if let Ok(value) = id.parse::<i64>() {
        return value.rem_euclid(n as i64) as usize;
    }
    id.chars().next().map_or(0, |c| c as usize % n)
}

/// Chain-palette color for a chain identifier.
#[must_use]
pub fn chain_color(chain_id: &str) -> Color {
    CHAIN_PALETTE[chain_palette_index(chain_id)]
}
