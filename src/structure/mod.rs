//! Structural records: proteins (chains → residues → named atoms) and
//! small molecules (atoms + index bonds).
//!
//! These types are read-only inputs to the geometry layer; nothing in the
//! rendering path mutates them.

mod molecule;
mod protein;

pub use molecule::{Bond, Molecule, MoleculeAtom};
pub use protein::{
    is_backbone_atom, Atom, Chain, Protein, Residue, ResidueAtoms,
    BACKBONE_ATOMS, DEFAULT_ATOM_RADIUS, WATER_RESIDUE,
};
