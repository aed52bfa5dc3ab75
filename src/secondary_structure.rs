//! Secondary structure classes and chain segmentation.
//!
//! A chain is split into maximal runs of residues sharing the same class.
//! Segments borrow contiguous slices of the chain, so concatenating them
//! always reproduces the chain exactly.

use serde::{Deserialize, Serialize};

use crate::color::{palette, Color};
use crate::structure::{Chain, Protein, Residue};

/// Secondary structure type for a residue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum SSType {
    /// Alpha helix (`"H"`).
    Helix,
    /// Beta strand (`"E"`).
    Sheet,
    /// Anything else, including an empty code.
    #[default]
    Loop,
}

impl SSType {
    /// Normalize a raw structure code. Only `"H"` and `"E"` are recognised;
    /// every other value, including the empty string, is a loop.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "H" => Self::Helix,
            "E" => Self::Sheet,
            _ => Self::Loop,
        }
    }

    /// Canonical one-letter code (`H`, `E`, `C`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Helix => "H",
            Self::Sheet => "E",
            Self::Loop => "C",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Helix => "Helix",
            Self::Sheet => "Sheet",
            Self::Loop => "Loop",
        }
    }

    /// Get the color for this SS type
    #[must_use]
    pub fn color(self) -> Color {
        palette::ss_color(self)
    }
}

/// A maximal run of same-class residues within one chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    /// Class shared by every residue in the run.
    pub ss: SSType,
    /// Identifier of the owning chain.
    pub chain_id: &'a str,
    /// Index of the chain within its protein (0 for a lone chain).
    pub chain_index: usize,
    /// The residues of the run, never empty.
    pub residues: &'a [Residue],
}

impl Segment<'_> {
    /// Number of residues in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false`; segments hold at least one residue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// Split one chain into secondary-structure segments.
///
/// Single left-to-right scan; a new segment starts whenever the residue's
/// class differs from the run in progress. An empty chain yields no
/// segments.
#[must_use]
pub fn segment_chain(chain: &Chain, chain_index: usize) -> Vec<Segment<'_>> {
    let residues = chain.residues.as_slice();
    let mut segments = Vec::new();
    let Some(first) = residues.first() else {
        return segments;
    };

    let mut start = 0;
    let mut current = first.ss_type();
    for (i, residue) in residues.iter().enumerate().skip(1) {
        let ss = residue.ss_type();
        if ss != current {
            segments.push(Segment {
                ss: current,
                chain_id: &chain.id,
                chain_index,
                residues: &residues[start..i],
            });
            start = i;
            current = ss;
        }
    }
    segments.push(Segment {
        ss: current,
        chain_id: &chain.id,
        chain_index,
        residues: &residues[start..],
    });
    segments
}

/// Segment every chain of a protein, in chain order.
#[must_use]
pub fn segment_protein(protein: &Protein) -> Vec<Segment<'_>> {
    protein
        .chains
        .iter()
        .enumerate()
        .flat_map(|(i, chain)| segment_chain(chain, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_codes(codes: &[&str]) -> Chain {
        Chain::new(
            "A",
            codes
                .iter()
                .enumerate()
                .map(|(i, code)| Residue::new(&format!("R{i}"), code))
                .collect(),
        )
    }

    fn shape(segments: &[Segment<'_>]) -> Vec<(SSType, usize)> {
        segments.iter().map(|s| (s.ss, s.len())).collect()
    }

    #[test]
    fn test_empty_chain() {
        let chain = chain_with_codes(&[]);
        assert!(segment_chain(&chain, 0).is_empty());
    }

    #[test]
    fn mixed_codes_segment_as_expected() {
        let chain = chain_with_codes(&["H", "H", "E", "", ""]);
        let segments = segment_chain(&chain, 0);
        assert_eq!(
            shape(&segments),
            [(SSType::Helix, 2), (SSType::Sheet, 1), (SSType::Loop, 2)]
        );
        assert!(segments.iter().all(|s| s.chain_id == "A"));
    }

    #[test]
    fn unknown_codes_merge_into_one_loop() {
        let chain = chain_with_codes(&["C", "", "T", "S"]);
        assert_eq!(shape(&segment_chain(&chain, 0)), [(SSType::Loop, 4)]);
    }

    #[test]
    fn single_residue_chain() {
        let chain = chain_with_codes(&["E"]);
        assert_eq!(shape(&segment_chain(&chain, 0)), [(SSType::Sheet, 1)]);
    }

    #[test]
    fn segmentation_is_a_partition() {
        let codes = ["", "H", "H", "H", "E", "E", "C", "H", "E", "E", ""];
        let chain = chain_with_codes(&codes);
        let segments = segment_chain(&chain, 0);
        let rejoined: Vec<&Residue> =
            segments.iter().flat_map(|s| s.residues.iter()).collect();
        let original: Vec<&Residue> = chain.residues.iter().collect();
        assert_eq!(rejoined, original);
        for pair in segments.windows(2) {
            assert_ne!(pair[0].ss, pair[1].ss);
        }
    }

    #[test]
    fn run_of_k_yields_one_segment_of_k() {
        for k in 1..6 {
            let mut codes = vec!["E"];
            codes.extend(std::iter::repeat_n("H", k));
            codes.push("E");
            let chain = chain_with_codes(&codes);
            let segments = segment_chain(&chain, 0);
            assert_eq!(segments.len(), 3);
            assert_eq!((segments[1].ss, segments[1].len()), (SSType::Helix, k));
        }
    }

    #[test]
    fn protein_segments_carry_chain_index() {
        let protein = Protein {
            chains: vec![
                chain_with_codes(&["H", "H"]),
                Chain::new("B", vec![Residue::new("GLY", "E")]),
            ],
            ..Protein::default()
        };
        let segments = segment_protein(&protein);
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[1].chain_id, segments[1].chain_index), ("B", 1));
    }

    #[test]
    fn code_normalization() {
        assert_eq!(SSType::from_code("H"), SSType::Helix);
        assert_eq!(SSType::from_code("E"), SSType::Sheet);
        assert_eq!(SSType::from_code("h"), SSType::Loop);
        assert_eq!(SSType::from_code(""), SSType::Loop);
        assert_eq!(SSType::Loop.code(), "C");
    }
}
