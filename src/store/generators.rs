//! Procedural CA traces for the larger sample structures.
//!
//! Every generator places one `CA` atom per residue. Residue types are drawn
//! from the caller's RNG so a fixed seed reproduces the same structure.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

use crate::structure::{Atom, Residue};

/// Radius stored on every generated CA atom.
pub const CA_RADIUS: f32 = 1.7;

const HELIX_RESIDUES: &[&str] = &[
    "ALA", "LEU", "GLU", "LYS", "ARG", "SER", "THR", "VAL", "ILE", "PHE",
];
const STRAND_RESIDUES: &[&str] =
    &["VAL", "ILE", "LEU", "PHE", "TYR", "TRP", "THR"];
const COLLAGEN_REPEAT: [&str; 3] = ["GLY", "PRO", "HYP"];

/// Single-CA residue at `position`.
#[must_use]
pub fn ca_residue(name: &str, ss: &str, position: Vec3) -> Residue {
    Residue::new(name, ss)
        .with_atom("CA", Atom::new("C", position).with_radius(CA_RADIUS))
}

fn pick<'a>(rng: &mut StdRng, names: &[&'a str]) -> &'a str {
    names[rng.random_range(0..names.len())]
}

fn last_ca(residues: &[Residue]) -> Vec3 {
    residues
        .last()
        .and_then(|r| r.atom_position("CA"))
        .unwrap_or_default()
}

/// `helices` alpha helices of `per_helix` residues each, side by side along
/// X, joined by five-residue glycine loops.
///
/// Each helix turns every 3.6 residues at radius 2 Å and rises 1.5 Å per
/// residue; consecutive helices sit 10 Å apart.
#[must_use]
pub fn helical(
    rng: &mut StdRng,
    per_helix: usize,
    helices: usize,
    offset: Vec3,
) -> Vec<Residue> {
    let mut residues = Vec::with_capacity(per_helix * helices + 5 * helices);
    for helix in 0..helices {
        for i in 0..per_helix {
            let (sin_a, cos_a) = (i as f32 / 3.6 * TAU).sin_cos();
            let position = offset
                + Vec3::new(
                    cos_a * 2.0 + helix as f32 * 10.0,
                    sin_a * 2.0,
                    i as f32 * 1.5,
                );
            residues.push(ca_residue(pick(rng, HELIX_RESIDUES), "H", position));
        }
        if helix + 1 < helices {
            for _ in 0..5 {
                let position = last_ca(&residues) + Vec3::new(2.0, 0.0, 2.0);
                residues.push(ca_residue("GLY", "C", position));
            }
        }
    }
    residues
}

/// Closed barrel of `strands` vertical strands on a 10 Å circle, joined by
/// three-residue glycine loops that step toward the next strand.
#[must_use]
pub fn beta_barrel(
    rng: &mut StdRng,
    strands: usize,
    strand_len: usize,
    offset: Vec3,
) -> Vec<Residue> {
    const BARREL_RADIUS: f32 = 10.0;
    let rim = |strand: usize| {
        let (sin_a, cos_a) = (strand as f32 / strands as f32 * TAU).sin_cos();
        offset + Vec3::new(cos_a, sin_a, 0.0) * BARREL_RADIUS
    };

    let mut residues = Vec::new();
    for strand in 0..strands {
        let start = rim(strand);
        for i in 0..strand_len {
            let z = offset.z + i as f32 * 3.5 - strand_len as f32 * 1.75;
            let position = Vec3::new(start.x, start.y, z);
            residues.push(ca_residue(pick(rng, STRAND_RESIDUES), "E", position));
        }
        if strand + 1 < strands {
            let last = last_ca(&residues);
            let next = rim(strand + 1);
            for i in 0..3 {
                let t = (i + 1) as f32 / 4.0;
                let position = Vec3::new(
                    last.x * (1.0 - t) + next.x * t,
                    last.y * (1.0 - t) + next.y * t,
                    last.z - 3.5,
                );
                residues.push(ca_residue("GLY", "C", position));
            }
        }
    }
    residues
}

/// One strand of a collagen-style triple helix: Gly-Pro-Hyp repeats on a
/// tight 1 Å spiral, three residues per turn, 0.9 Å rise.
#[must_use]
pub fn triple_helix(n_residues: usize, offset: Vec3) -> Vec<Residue> {
    (0..n_residues)
        .map(|i| {
            let (sin_a, cos_a) = (i as f32 / 3.0 * TAU).sin_cos();
            let position = offset + Vec3::new(cos_a, sin_a, i as f32 * 0.9);
            ca_residue(COLLAGEN_REPEAT[i % 3], "H", position)
        })
        .collect()
}

/// Mixed fold: three 15-residue helices followed by a four-strand sheet.
///
/// The sheet starts 10 Å past the last helix residue in X and 10 Å below
/// it in Z. Strands are 7 residues, alternating VAL and ILE, spaced 5 Å
/// apart; each but the last is followed by a short glycine loop.
#[must_use]
pub fn mixed(rng: &mut StdRng, offset: Vec3) -> Vec<Residue> {
    let mut residues = helical(rng, 15, 3, offset);
    let anchor = last_ca(&residues) + Vec3::new(10.0, 0.0, -10.0);

    for strand in 0..4 {
        let name = if strand % 2 == 0 { "VAL" } else { "ILE" };
        let x = anchor.x + strand as f32 * 5.0;
        for i in 0..7 {
            let position = Vec3::new(x, anchor.y, anchor.z + i as f32 * 3.5);
            residues.push(ca_residue(name, "E", position));
        }
        if strand < 3 {
            let last = last_ca(&residues);
            for i in 0..3 {
                let position =
                    Vec3::new(last.x + 1.0, last.y, last.z - i as f32 * 3.0);
                residues.push(ca_residue("GLY", "C", position));
            }
        }
    }
    residues
}
