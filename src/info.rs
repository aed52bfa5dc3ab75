//! Protein summary for the info panel.

use std::cmp::Reverse;
use std::fmt;

use serde::Serialize;

use crate::secondary_structure::SSType;
use crate::structure::Protein;

/// Placeholder for missing metadata.
pub const NOT_AVAILABLE: &str = "N/A";

const RESIDUE_NAMES: &[(&str, &str)] = &[
    ("ALA", "Alanine"),
    ("ARG", "Arginine"),
    ("ASN", "Asparagine"),
    ("ASP", "Aspartic acid"),
    ("CYS", "Cysteine"),
    ("GLN", "Glutamine"),
    ("GLU", "Glutamic acid"),
    ("GLY", "Glycine"),
    ("HIS", "Histidine"),
    ("ILE", "Isoleucine"),
    ("LEU", "Leucine"),
    ("LYS", "Lysine"),
    ("MET", "Methionine"),
    ("PHE", "Phenylalanine"),
    ("PRO", "Proline"),
    ("SER", "Serine"),
    ("THR", "Threonine"),
    ("TRP", "Tryptophan"),
    ("TYR", "Tyrosine"),
    ("VAL", "Valine"),
    ("HYP", "Hydroxyproline"),
    ("HOH", "Water"),
];

const STRUCTURE_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "1cbn",
        "Crambin has a compact structure with three disulfide bridges that \
         contribute to its exceptional stability.",
    ),
    (
        "1hho",
        "Hemoglobin has a quaternary structure with four subunits arranged in \
         a tetrahedral configuration, each containing a heme group that binds \
         oxygen.",
    ),
    (
        "1gfl",
        "Green Fluorescent Protein has a distinctive beta-barrel structure \
         (like a can) with the fluorophore located in the center of the \
         barrel.",
    ),
    (
        "4ins",
        "Insulin consists of two chains (A and B) connected by disulfide \
         bonds, with alpha-helical regions that are important for receptor \
         binding.",
    ),
    (
        "1bkv",
        "Collagen has a unique triple-helical structure with a repeating \
         sequence pattern (often Gly-X-Y) that allows tight packing.",
    ),
    (
        "6vxx",
        "The SARS-CoV-2 Spike protein is a trimeric glycoprotein with a large \
         ectodomain that includes the receptor-binding domain (RBD).",
    ),
    (
        "3eiy",
        "Lysozyme has a mixed alpha/beta structure with a deep cleft that \
         forms the active site for substrate binding.",
    ),
    (
        "1ubq",
        "Ubiquitin has a compact globular structure with a mixed alpha/beta \
         fold, featuring a beta-grasp motif.",
    ),
];

const GENERIC_DESCRIPTION: &str = "This protein has a unique \
    three-dimensional structure determined by its amino acid sequence.";

/// English name for a three-letter residue code, or the code itself.
#[must_use]
pub fn full_residue_name(code: &str) -> &str {
    RESIDUE_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map_or(code, |&(_, name)| name)
}

/// Structural notes for a known sample identifier, or a generic sentence.
#[must_use]
pub fn structure_description(id: &str) -> &'static str {
    let id = id.trim();
    STRUCTURE_DESCRIPTIONS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(id))
        .map_or(GENERIC_DESCRIPTION, |&(_, text)| text)
}

/// `part / whole` as a whole-number percentage; zero for an empty whole.
fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// How often one residue type occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidueShare {
    /// Three-letter code.
    pub code: String,
    /// English name.
    pub name: String,
    /// Occurrences across all chains.
    pub count: usize,
    /// Rounded share of all residues.
    pub percent: u32,
}

/// Residue count of one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainShare {
    /// Chain identifier.
    pub id: String,
    /// Residues in the chain.
    pub residues: usize,
}

/// Residues per secondary-structure class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SecondaryStructureCounts {
    /// `H` residues.
    pub helix: usize,
    /// `E` residues.
    pub sheet: usize,
    /// Everything else.
    #[serde(rename = "loop")]
    pub loops: usize,
}

impl SecondaryStructureCounts {
    /// Count for one class.
    #[must_use]
    pub const fn get(&self, ss: SSType) -> usize {
        match ss {
            SSType::Helix => self.helix,
            SSType::Sheet => self.sheet,
            SSType::Loop => self.loops,
        }
    }

    /// Rounded percentage of `total` for one class.
    #[must_use]
    pub fn percent(&self, ss: SSType, total: usize) -> u32 {
        percent(self.get(ss), total)
    }
}

/// Everything the info panel shows about a protein.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinSummary {
    /// Common name, when known.
    pub name: Option<String>,
    /// Record description, when known.
    pub description: Option<String>,
    /// Number of chains.
    pub chain_count: usize,
    /// Residues across all chains.
    pub residue_count: usize,
    /// Atoms across all residues.
    pub atom_count: usize,
    /// `"<r> Å"` or `"N/A"`.
    pub resolution: String,
    /// Experimental method or `"N/A"`.
    pub method: String,
    /// Residue types, most frequent first.
    pub composition: Vec<ResidueShare>,
    /// Residue count per chain, in chain order.
    pub chains: Vec<ChainShare>,
    /// Secondary-structure tally.
    pub secondary_structure: SecondaryStructureCounts,
    /// Notes on the fold.
    pub structure_notes: String,
}

impl ProteinSummary {
    /// Summarize `protein`; `id` selects the structure notes.
    #[must_use]
    pub fn new(protein: &Protein, id: &str) -> Self {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut ss = SecondaryStructureCounts::default();
        let mut residue_count = 0;
        let mut atom_count = 0;

        for (_, residue) in protein.residues() {
            residue_count += 1;
            atom_count += residue.atoms.len();
            match counts.iter_mut().find(|(code, _)| *code == residue.name) {
                Some((_, n)) => *n += 1,
                None => counts.push((residue.name.as_str(), 1)),
            }
            match residue.ss_type() {
                SSType::Helix => ss.helix += 1,
                SSType::Sheet => ss.sheet += 1,
                SSType::Loop => ss.loops += 1,
            }
        }
        // Stable: ties keep first-seen order.
        counts.sort_by_key(|&(_, n)| Reverse(n));

        let composition = counts
            .into_iter()
            .map(|(code, count)| ResidueShare {
                code: code.to_owned(),
                name: full_residue_name(code).to_owned(),
                count,
                percent: percent(count, residue_count),
            })
            .collect();

        Self {
            name: protein.name.clone(),
            description: protein.description.clone(),
            chain_count: protein.chains.len(),
            residue_count,
            atom_count,
            resolution: protein
                .resolution
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |r| format!("{r} Å")),
            method: protein
                .experimental_method
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            composition,
            chains: protein
                .chains
                .iter()
                .map(|c| ChainShare {
                    id: c.id.clone(),
                    residues: c.residues.len(),
                })
                .collect(),
            secondary_structure: ss,
            structure_notes: structure_description(id).to_owned(),
        }
    }
}

impl fmt::Display for ProteinSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "{name}")?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
        }
        writeln!(f)?;
        writeln!(f, "Chains:     {}", self.chain_count)?;
        writeln!(f, "Residues:   {}", self.residue_count)?;
        writeln!(f, "Atoms:      {}", self.atom_count)?;
        writeln!(f, "Resolution: {}", self.resolution)?;
        writeln!(f, "Method:     {}", self.method)?;

        writeln!(f, "\nAmino Acid Composition")?;
        for share in &self.composition {
            writeln!(
                f,
                "  {} ({}): {} ({}%)",
                share.name, share.code, share.count, share.percent
            )?;
        }
        writeln!(f, "\nChain Composition")?;
        for chain in &self.chains {
            writeln!(f, "  Chain {}: {} residues", chain.id, chain.residues)?;
        }

        writeln!(f, "\nSecondary Structure")?;
        for ss in [SSType::Helix, SSType::Sheet, SSType::Loop] {
            writeln!(
                f,
                "  {}: {} ({}%)",
                ss.label(),
                self.secondary_structure.get(ss),
                self.secondary_structure.percent(ss, self.residue_count)
            )?;
        }
        write!(f, "\n{}", self.structure_notes)
    }
}
