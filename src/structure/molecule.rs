use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One atom of a small molecule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeAtom {
    /// Element symbol.
    pub element: String,
    /// Position in Å.
    pub position: Vec3,
}

impl MoleculeAtom {
    /// Atom of `element` at `position`.
    #[must_use]
    pub fn new(element: &str, position: Vec3) -> Self {
        Self {
            element: element.to_owned(),
            position,
        }
    }
}

/// A bond between two atoms, by index into [`Molecule::atoms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    /// Index of the first atom.
    pub start: usize,
    /// Index of the second atom.
    pub end: usize,
}

impl Bond {
    /// Bond between atoms `start` and `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A small molecule: atoms plus index-based bonds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Chemical formula.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Atoms in insertion order.
    pub atoms: Vec<MoleculeAtom>,
    /// Bonds referencing [`Self::atoms`] by index.
    pub bonds: Vec<Bond>,
}

impl Molecule {
    /// Whether the molecule has no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Bonds whose endpoints both index existing atoms, paired with those
    /// atoms. Out-of-range indices are skipped.
    pub fn resolved_bonds(
        &self,
    ) -> impl Iterator<Item = (&MoleculeAtom, &MoleculeAtom)> {
        self.bonds.iter().filter_map(|bond| {
            Some((self.atoms.get(bond.start)?, self.atoms.get(bond.end)?))
        })
    }

    /// Element counts in order of first appearance.
    #[must_use]
    pub fn element_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for atom in &self.atoms {
            match counts.iter_mut().find(|(e, _)| *e == atom.element) {
                Some((_, n)) => *n += 1,
                None => counts.push((atom.element.clone(), 1)),
            }
        }
        counts
    }

    /// Formula string built from [`Self::element_counts`], e.g. `"H2O"`.
    #[must_use]
    pub fn derived_formula(&self) -> String {
        self.element_counts()
            .into_iter()
            .map(|(element, count)| {
                if count > 1 {
                    format!("{element}{count}")
                } else {
                    element
                }
            })
            .collect()
    }
}
