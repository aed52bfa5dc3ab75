//! The built-in sample structures.
//!
//! Crambin, ubiquitin and lysozyme are short hand-placed CA traces. The
//! larger entries come from [`super::generators`]. `peptide` is the only
//! full-atom sample: three residues plus a water, with hydrogens, side
//! chains and intra-residue bonds.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::generators::{beta_barrel, ca_residue, helical, mixed, triple_helix};
use super::topology::residue_bonds;
use crate::structure::{Atom, Chain, Protein, Residue};

/// Sample identifiers in menu order.
pub const SAMPLE_IDS: [&str; 9] = [
    "1cbn", "1hho", "1gfl", "4ins", "1bkv", "6vxx", "3eiy", "1ubq", "peptide",
];

struct Meta {
    name: &'static str,
    resolution: f32,
    method: &'static str,
    description: &'static str,
}

impl Meta {
    fn protein(&self, chains: Vec<Chain>) -> Protein {
        Protein {
            chains,
            name: Some(self.name.to_owned()),
            description: Some(self.description.to_owned()),
            resolution: Some(self.resolution),
            experimental_method: Some(self.method.to_owned()),
        }
    }
}

const X_RAY: &str = "X-ray diffraction";

/// Residues of a straight CA trace: residue `i` sits at `step * i`.
fn trace(sequence: &[(&str, &str)], step: Vec3) -> Vec<Residue> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, (name, ss))| ca_residue(name, ss, step * i as f32))
        .collect()
}

/// Expand `(ss, "AAA BBB ...")` runs into `(name, ss)` pairs.
fn runs<'a>(spans: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    spans
        .iter()
        .flat_map(|&(ss, names)| names.split_whitespace().map(move |n| (n, ss)))
        .collect()
}

fn crambin() -> Protein {
    let sequence = runs(&[
        ("H", "THR THR CYS CYS PRO SER ILE VAL ALA ARG"),
        ("C", "SER ASN PHE ASN VAL"),
        ("E", "CYS ARG LEU PRO GLY"),
        ("C", "THR PRO GLU ALA"),
        ("H", "ILE CYS ALA THR TYR THR"),
        ("C", "GLY CYS ILE ILE ILE PRO GLY ALA THR CYS PRO GLY ASP TYR ALA ASN"),
    ]);
    Meta {
        name: "Crambin",
        resolution: 1.5,
        method: X_RAY,
        description: "A small plant protein with three disulfide bridges \
                      that stabilize its structure.",
    }
    .protein(vec![Chain::new("A", trace(&sequence, Vec3::new(3.0, 1.0, 0.0)))])
}

fn hemoglobin(rng: &mut StdRng) -> Protein {
    let subunits = [
        ("A", 0.0, 0.0),
        ("B", 30.0, 0.0),
        ("C", 0.0, 30.0),
        ("D", 30.0, 30.0),
    ];
    let chains = subunits
        .into_iter()
        .map(|(id, x, y)| {
            Chain::new(id, helical(rng, 20, 3, Vec3::new(x, y, 0.0)))
        })
        .collect();
    Meta {
        name: "Hemoglobin",
        resolution: 2.1,
        method: X_RAY,
        description: "Oxygen-transport protein in red blood cells, containing \
                      four subunits each with a heme group.",
    }
    .protein(chains)
}

fn gfp(rng: &mut StdRng) -> Protein {
    Meta {
        name: "Green Fluorescent Protein",
        resolution: 1.9,
        method: X_RAY,
        description: "Fluorescent protein from jellyfish, with a beta-barrel \
                      structure surrounding the chromophore.",
    }
    .protein(vec![Chain::new("A", beta_barrel(rng, 11, 15, Vec3::ZERO))])
}

fn insulin(rng: &mut StdRng) -> Protein {
    Meta {
        name: "Insulin",
        resolution: 1.5,
        method: X_RAY,
        description: "Peptide hormone that regulates blood glucose levels, \
                      consisting of A and B chains.",
    }
    .protein(vec![
        Chain::new("A", helical(rng, 10, 2, Vec3::ZERO)),
        Chain::new("B", helical(rng, 15, 2, Vec3::new(15.0, 0.0, 0.0))),
    ])
}

fn collagen() -> Protein {
    let chains = [("A", 0.0), ("B", 2.0), ("C", -2.0)]
        .into_iter()
        .map(|(id, d)| Chain::new(id, triple_helix(30, Vec3::new(d, d, 0.0))))
        .collect();
    Meta {
        name: "Collagen",
        resolution: 2.0,
        method: X_RAY,
        description: "Fibrous protein forming the main structural component \
                      of connective tissues.",
    }
    .protein(chains)
}

fn spike(rng: &mut StdRng) -> Protein {
    let chains = [("A", 0.0, 0.0), ("B", 25.0, 10.0), ("C", -25.0, 10.0)]
        .into_iter()
        .map(|(id, x, y)| Chain::new(id, mixed(rng, Vec3::new(x, y, 0.0))))
        .collect();
    Meta {
        name: "SARS-CoV-2 Spike",
        resolution: 2.8,
        method: "Cryo-EM",
        description: "Viral surface protein that mediates entry into host \
                      cells, target for vaccines and therapeutics.",
    }
    .protein(chains)
}

fn lysozyme() -> Protein {
    let sequence =
        runs(&[("H", "LYS VAL PHE GLY ARG CYS GLU LEU ALA ALA")]);
    Meta {
        name: "Lysozyme",
        resolution: 2.0,
        method: X_RAY,
        description: "Enzyme that damages bacterial cell walls by catalyzing \
                      the hydrolysis of peptidoglycan.",
    }
    .protein(vec![Chain::new("A", trace(&sequence, Vec3::Y * 3.0))])
}

fn ubiquitin() -> Protein {
    let sequence = runs(&[
        ("C", "MET GLN"),
        ("E", "ILE PHE VAL LYS THR LEU"),
        ("C", "THR GLY"),
    ]);
    Meta {
        name: "Ubiquitin",
        resolution: 1.8,
        method: X_RAY,
        description: "Small regulatory protein that labels proteins for \
                      degradation and plays roles in many cellular processes.",
    }
    .protein(vec![Chain::new("A", trace(&sequence, Vec3::X * 3.0))])
}

/// Van der Waals radius for the handful of elements in the peptide.
fn vdw_radius(element: &str) -> f32 {
    match element {
        "H" => 1.2,
        "N" => 1.55,
        "O" => 1.52,
        "S" => 1.8,
        _ => 1.7,
    }
}

/// Full-atom residue: atoms are `(name, element, offset)` relative to
/// `origin`, bonds come from the residue topology tables.
fn full_residue(
    name: &str,
    ss: &str,
    origin: Vec3,
    atoms: &[(&str, &str, [f32; 3])],
    b_factor: f32,
) -> Residue {
    let mut residue = Residue::new(name, ss);
    for &(atom_name, element, offset) in atoms {
        let mut atom = Atom::new(element, origin + Vec3::from_array(offset))
            .with_radius(vdw_radius(element));
        atom.b_factor = Some(b_factor);
        residue = residue.with_atom(atom_name, atom);
    }
    for (a, b) in residue_bonds(name) {
        residue = residue.with_bond(a, b);
    }
    residue
}

const BACKBONE: [(&str, &str, [f32; 3]); 6] = [
    ("N", "N", [0.0, 0.0, 0.0]),
    ("CA", "C", [1.46, 0.0, 0.0]),
    ("C", "C", [2.0, 1.42, 0.0]),
    ("O", "O", [1.3, 2.4, 0.0]),
    ("H", "H", [-0.5, -0.85, 0.0]),
    ("HA", "H", [1.8, -0.5, 0.9]),
];

fn peptide() -> Protein {
    let with_side_chain = |side: &[(&'static str, &'static str, [f32; 3])]| {
        BACKBONE.iter().chain(side).copied().collect::<Vec<_>>()
    };
    let ala = with_side_chain(&[("CB", "C", [2.0, -0.77, -1.2])]);
    let ser = with_side_chain(&[
        ("CB", "C", [2.0, -0.77, -1.2]),
        ("OG", "O", [3.4, -0.8, -1.3]),
        ("HG", "H", [3.7, -1.3, -2.0]),
    ]);
    let water = [
        ("O", "O", [0.0, 0.0, 0.0]),
        ("H1", "H", [0.76, 0.59, 0.0]),
        ("H2", "H", [-0.76, 0.59, 0.0]),
    ];

    let residues = vec![
        full_residue("ALA", "E", Vec3::ZERO, &ala, 12.0),
        full_residue("SER", "E", Vec3::X * 3.8, &ser, 35.0),
        full_residue("GLY", "C", Vec3::X * 7.6, &BACKBONE, 60.0),
        full_residue("HOH", "", Vec3::new(4.0, 6.0, 2.0), &water, 80.0),
    ];
    Protein {
        chains: vec![Chain::new("A", residues)],
        name: Some("Tripeptide".to_owned()),
        description: Some(
            "Full-atom Ala-Ser-Gly tripeptide with one bound water."
                .to_owned(),
        ),
        resolution: None,
        experimental_method: None,
    }
}

/// Build every sample, in [`SAMPLE_IDS`] order. Generated residue types are
/// drawn from a single RNG seeded with `seed`.
#[must_use]
pub fn build_samples(seed: u64) -> Vec<(&'static str, Protein)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let proteins = [
        crambin(),
        hemoglobin(&mut rng),
        gfp(&mut rng),
        insulin(&mut rng),
        collagen(),
        spike(&mut rng),
        lysozyme(),
        ubiquitin(),
        peptide(),
    ];
    SAMPLE_IDS.into_iter().zip(proteins).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secondary_structure::segment_protein;

    fn sample(id: &str) -> Protein {
        build_samples(1)
            .into_iter()
            .find(|(i, _)| *i == id)
            .unwrap()
            .1
    }

    #[test]
    fn crambin_trace() {
        let p = sample("1cbn");
        let chain = &p.chains[0];
        assert_eq!(chain.residues.len(), 46);
        assert_eq!(chain.residues[45].name, "ASN");
        assert_eq!(
            chain.residues[45].atom_position("CA"),
            Some(Vec3::new(135.0, 45.0, 0.0))
        );
        assert_eq!(p.resolution, Some(1.5));
        let segments = segment_protein(&p);
        let lens: Vec<usize> = segments.iter().map(|s| s.len()).collect();
        assert_eq!(lens, [10, 5, 5, 4, 6, 16]);
    }

    #[test]
    fn chain_layouts() {
        let ids = |p: &Protein| -> Vec<String> {
            p.chains.iter().map(|c| c.id.clone()).collect()
        };
        assert_eq!(ids(&sample("1hho")), ["A", "B", "C", "D"]);
        assert_eq!(ids(&sample("4ins")), ["A", "B"]);
        assert_eq!(ids(&sample("1bkv")), ["A", "B", "C"]);
        assert_eq!(ids(&sample("6vxx")), ["A", "B", "C"]);
        assert_eq!(sample("4ins").chains[1].residues.len(), 35);
        assert_eq!(sample("6vxx").experimental_method.as_deref(), Some("Cryo-EM"));
    }

    #[test]
    fn same_seed_same_samples() {
        assert_eq!(build_samples(9), build_samples(9));
    }

    #[test]
    fn peptide_is_full_atom() {
        let p = sample("peptide");
        let residues = &p.chains[0].residues;
        assert_eq!(residues.len(), 4);
        assert!(residues[3].is_water());
        let ser = &residues[1];
        assert_eq!(ser.atoms.len(), 9);
        // Backbone, CA-CB, CB-OG and OG-HG all resolve.
        assert_eq!(ser.resolved_bonds().count(), ser.bonds.len());
        assert_eq!(residues[3].resolved_bonds().count(), 2);
        assert!(p.resolution.is_none());
    }
}
