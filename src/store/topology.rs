//! Intra-residue bond tables for the standard amino acids.
//!
//! Bonds are atom-name pairs. Every residue shares the backbone bonds and
//! the backbone hydrogens; side-chain bonds hang off `CB`.

/// Backbone bonds shared by every amino acid.
pub const BACKBONE_BONDS: &[(&str, &str)] =
    &[("N", "CA"), ("CA", "C"), ("C", "O"), ("N", "H"), ("CA", "HA")];

/// Side-chain bonds keyed by three-letter code. Glycine has none; alanine
/// only `CA`–`CB`.
const SIDE_CHAIN_BONDS: &[(&str, &[(&str, &str)])] = &[
    ("GLY", &[]),
    ("ALA", &[("CA", "CB")]),
    ("VAL", &[("CA", "CB"), ("CB", "CG1"), ("CB", "CG2")]),
    ("LEU", &[("CA", "CB"), ("CB", "CG"), ("CG", "CD1"), ("CG", "CD2")]),
    ("ILE", &[("CA", "CB"), ("CB", "CG1"), ("CG1", "CD1"), ("CB", "CG2")]),
    ("PRO", &[("CA", "CB"), ("CB", "CG"), ("CG", "CD"), ("CD", "N")]),
    ("SER", &[("CA", "CB"), ("CB", "OG"), ("OG", "HG")]),
    ("THR", &[("CA", "CB"), ("CB", "OG1"), ("CB", "CG2")]),
    ("CYS", &[("CA", "CB"), ("CB", "SG")]),
    ("MET", &[("CA", "CB"), ("CB", "CG"), ("CG", "SD"), ("SD", "CE")]),
    ("ASN", &[("CA", "CB"), ("CB", "CG"), ("CG", "OD1"), ("CG", "ND2")]),
    ("ASP", &[("CA", "CB"), ("CB", "CG"), ("CG", "OD1"), ("CG", "OD2")]),
    (
        "GLN",
        &[("CA", "CB"), ("CB", "CG"), ("CG", "CD"), ("CD", "OE1"), ("CD", "NE2")],
    ),
    (
        "GLU",
        &[("CA", "CB"), ("CB", "CG"), ("CG", "CD"), ("CD", "OE1"), ("CD", "OE2")],
    ),
    (
        "LYS",
        &[("CA", "CB"), ("CB", "CG"), ("CG", "CD"), ("CD", "CE"), ("CE", "NZ")],
    ),
    (
        "ARG",
        &[
            ("CA", "CB"),
            ("CB", "CG"),
            ("CG", "CD"),
            ("CD", "NE"),
            ("NE", "CZ"),
            ("CZ", "NH1"),
            ("CZ", "NH2"),
        ],
    ),
    // imidazole ring
    (
        "HIS",
        &[
            ("CA", "CB"),
            ("CB", "CG"),
            ("CG", "ND1"),
            ("ND1", "CE1"),
            ("CE1", "NE2"),
            ("NE2", "CD2"),
            ("CD2", "CG"),
        ],
    ),
    (
        "PHE",
        &[
            ("CA", "CB"),
            ("CB", "CG"),
            ("CG", "CD1"),
            ("CD1", "CE1"),
            ("CE1", "CZ"),
            ("CZ", "CE2"),
            ("CE2", "CD2"),
            ("CD2", "CG"),
        ],
    ),
    (
        "TYR",
        &[
            ("CA", "CB"),
            ("CB", "CG"),
            ("CG", "CD1"),
            ("CD1", "CE1"),
            ("CE1", "CZ"),
            ("CZ", "OH"),
            ("CZ", "CE2"),
            ("CE2", "CD2"),
            ("CD2", "CG"),
        ],
    ),
    // indole: pyrrole ring then benzene ring
    (
        "TRP",
        &[
            ("CA", "CB"),
            ("CB", "CG"),
            ("CG", "CD1"),
            ("CD1", "NE1"),
            ("NE1", "CE2"),
            ("CE2", "CD2"),
            ("CD2", "CG"),
            ("CE2", "CZ2"),
            ("CZ2", "CH2"),
            ("CH2", "CZ3"),
            ("CZ3", "CE3"),
            ("CE3", "CD2"),
        ],
    ),
];

/// Water bonds.
pub const WATER_BONDS: &[(&str, &str)] = &[("O", "H1"), ("O", "H2")];

/// Side-chain bonds for a residue type (case-insensitive), or `None` for
/// an unknown code.
#[must_use]
pub fn side_chain_bonds(
    residue_name: &str,
) -> Option<&'static [(&'static str, &'static str)]> {
    SIDE_CHAIN_BONDS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(residue_name))
        .map(|(_, bonds)| *bonds)
}

/// Every intra-residue bond for a residue type: backbone first, then side
/// chain. Water gets its own two bonds; unknown codes get the backbone
/// only.
#[must_use]
pub fn residue_bonds(residue_name: &str) -> Vec<(&'static str, &'static str)> {
    if residue_name.eq_ignore_ascii_case(crate::structure::WATER_RESIDUE) {
        return WATER_BONDS.to_vec();
    }
    let mut bonds = BACKBONE_BONDS.to_vec();
    bonds.extend_from_slice(side_chain_bonds(residue_name).unwrap_or_default());
    bonds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(side_chain_bonds("ALA").is_some());
        assert!(side_chain_bonds("ala").is_some());
        assert!(side_chain_bonds("GLY").is_some());
        assert!(side_chain_bonds("XXX").is_none());
    }

    #[test]
    fn aromatic_rings_close() {
        // Phenylalanine: CA-CB, CB-CG and a six-bond ring.
        assert_eq!(side_chain_bonds("PHE").unwrap().len(), 8);
        assert_eq!(side_chain_bonds("TRP").unwrap().len(), 12);
    }

    #[test]
    fn twenty_standard_residues() {
        assert_eq!(SIDE_CHAIN_BONDS.len(), 20);
    }

    #[test]
    fn full_residue_bonds() {
        assert_eq!(residue_bonds("GLY").len(), BACKBONE_BONDS.len());
        assert_eq!(residue_bonds("SER").len(), BACKBONE_BONDS.len() + 3);
        assert_eq!(residue_bonds("HOH"), WATER_BONDS);
        assert_eq!(residue_bonds("UNK"), BACKBONE_BONDS);
    }
}
