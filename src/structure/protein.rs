use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::secondary_structure::SSType;

/// Display radius used when an atom carries no radius of its own.
pub const DEFAULT_ATOM_RADIUS: f32 = 1.0;

/// Names of the four backbone atoms shared by every amino acid.
pub const BACKBONE_ATOMS: [&str; 4] = ["N", "CA", "C", "O"];

/// Residue name used for water molecules.
pub const WATER_RESIDUE: &str = "HOH";

/// Whether `atom_name` is one of the backbone atoms N, CA, C, O.
#[must_use]
pub fn is_backbone_atom(atom_name: &str) -> bool {
    BACKBONE_ATOMS.contains(&atom_name)
}

/// A single atom with its 3-D position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// X coordinate (Å).
    pub x: f32,
    /// Y coordinate (Å).
    pub y: f32,
    /// Z coordinate (Å).
    pub z: f32,
    /// Element symbol, e.g. `"C"` or `"Fe"`.
    pub element: String,
    /// Display radius; [`DEFAULT_ATOM_RADIUS`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// Crystallographic temperature factor, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_factor: Option<f32>,
}

impl Atom {
    /// Atom at `position` with no explicit radius or temperature factor.
    #[must_use]
    pub fn new(element: &str, position: Vec3) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            element: element.to_owned(),
            radius: None,
            b_factor: None,
        }
    }

    /// Builder-style radius override.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Stored radius, or [`DEFAULT_ATOM_RADIUS`].
    #[must_use]
    pub fn display_radius(&self) -> f32 {
        self.radius.unwrap_or(DEFAULT_ATOM_RADIUS)
    }
}

/// Atoms of one residue keyed by atom name.
///
/// Keys are unique; inserting an existing name replaces that atom in place.
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidueAtoms(Vec<(String, Atom)>);

impl ResidueAtoms {
    /// Empty atom map.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace the atom named `name`, returning the old atom.
    pub fn insert(&mut self, name: &str, atom: Atom) -> Option<Atom> {
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| n == name) {
            return Some(std::mem::replace(&mut slot.1, atom));
        }
        self.0.push((name.to_owned(), atom));
        None
    }

    /// Atom named `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Atom> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    /// Iterate `(name, atom)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Atom)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Number of atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the residue has no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Atom)> for ResidueAtoms {
    fn from_iter<I: IntoIterator<Item = (&'a str, Atom)>>(iter: I) -> Self {
        let mut atoms = Self::new();
        for (name, atom) in iter {
            let _ = atoms.insert(name, atom);
        }
        atoms
    }
}

/// One amino-acid (or water) unit of a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residue {
    /// Three-letter residue code.
    pub name: String,
    /// Raw secondary-structure code (`"H"`, `"E"`, anything else = loop).
    #[serde(default)]
    pub ss: String,
    /// Atoms keyed by atom name.
    pub atoms: ResidueAtoms,
    /// Intra-residue bonds as atom-name pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bonds: Vec<(String, String)>,
}

impl Residue {
    /// Residue with no atoms or bonds.
    #[must_use]
    pub fn new(name: &str, ss: &str) -> Self {
        Self {
            name: name.to_owned(),
            ss: ss.to_owned(),
            atoms: ResidueAtoms::new(),
            bonds: Vec::new(),
        }
    }

    /// Builder-style atom insertion.
    #[must_use]
    pub fn with_atom(mut self, name: &str, atom: Atom) -> Self {
        let _ = self.atoms.insert(name, atom);
        self
    }

    /// Builder-style bond insertion.
    #[must_use]
    pub fn with_bond(mut self, a: &str, b: &str) -> Self {
        self.bonds.push((a.to_owned(), b.to_owned()));
        self
    }

    /// Normalized secondary-structure class.
    #[must_use]
    pub fn ss_type(&self) -> SSType {
        SSType::from_code(&self.ss)
    }

    /// Whether this residue is a water molecule.
    #[must_use]
    pub fn is_water(&self) -> bool {
        self.name == WATER_RESIDUE
    }

    /// Position of the atom named `atom_name`, if present.
    #[must_use]
    pub fn atom_position(&self, atom_name: &str) -> Option<Vec3> {
        self.atoms.get(atom_name).map(Atom::position)
    }

    /// Bonds whose two endpoints both resolve to atoms of this residue.
    ///
    /// Unresolved endpoints are skipped.
    pub fn resolved_bonds(
        &self,
    ) -> impl Iterator<Item = ((&str, &Atom), (&str, &Atom))> {
        self.bonds.iter().filter_map(|(a, b)| {
            let atom_a = self.atoms.get(a)?;
            let atom_b = self.atoms.get(b)?;
            Some(((a.as_str(), atom_a), (b.as_str(), atom_b)))
        })
    }
}

/// An ordered chain of residues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    /// Chain identifier, usually a single letter.
    pub id: String,
    /// Residues in sequence order.
    pub residues: Vec<Residue>,
}

impl Chain {
    /// Chain with the given residues.
    #[must_use]
    pub fn new(id: &str, residues: Vec<Residue>) -> Self {
        Self {
            id: id.to_owned(),
            residues,
        }
    }
}

/// A protein: ordered chains plus optional metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Protein {
    /// Chains in file order.
    pub chains: Vec<Chain>,
    /// Common name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolution in Å.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<f32>,
    /// Experimental method, e.g. `"X-ray diffraction"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_method: Option<String>,
}

impl Protein {
    /// Iterate every residue of every chain with its chain.
    pub fn residues(&self) -> impl Iterator<Item = (&Chain, &Residue)> {
        self.chains
            .iter()
            .flat_map(|c| c.residues.iter().map(move |r| (c, r)))
    }

    /// Iterate every atom position in the structure.
    pub fn atom_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.residues()
            .flat_map(|(_, r)| r.atoms.iter().map(|(_, a)| a.position()))
    }

    /// Mean atom position, or the origin for an empty structure.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        let (sum, count) = self
            .atom_positions()
            .fold((Vec3::ZERO, 0usize), |(s, n), p| (s + p, n + 1));
        if count == 0 {
            Vec3::ZERO
        } else {
            sum / count as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon(x: f32) -> Atom {
        Atom::new("C", Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn residue_atoms_replace_keeps_keys_unique() {
        let mut atoms = ResidueAtoms::new();
        assert!(atoms.insert("CA", carbon(1.0)).is_none());
        assert!(atoms.insert("N", carbon(2.0)).is_none());
        let old = atoms.insert("CA", carbon(3.0));
        assert_eq!(old.map(|a| a.x), Some(1.0));
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms.get("CA").map(|a| a.x), Some(3.0));
        let names: Vec<&str> = atoms.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["CA", "N"]);
    }

    #[test]
    fn display_radius_falls_back() {
        assert_eq!(carbon(0.0).display_radius(), DEFAULT_ATOM_RADIUS);
        assert_eq!(carbon(0.0).with_radius(1.7).display_radius(), 1.7);
    }

    #[test]
    fn unresolved_bonds_are_skipped() {
        let residue = Residue::new("ALA", "H")
            .with_atom("N", carbon(0.0))
            .with_atom("CA", carbon(1.5))
            .with_bond("N", "CA")
            .with_bond("CA", "CB");
        let bonds: Vec<_> = residue
            .resolved_bonds()
            .map(|((a, _), (b, _))| (a, b))
            .collect();
        assert_eq!(bonds, [("N", "CA")]);
    }

    #[test]
    fn centroid_of_empty_protein_is_origin() {
        assert_eq!(Protein::default().centroid(), Vec3::ZERO);
    }

    #[test]
    fn centroid_averages_atoms() {
        let protein = Protein {
            chains: vec![Chain::new(
                "A",
                vec![
                    Residue::new("GLY", "").with_atom("CA", carbon(0.0)),
                    Residue::new("GLY", "").with_atom("CA", carbon(4.0)),
                ],
            )],
            ..Protein::default()
        };
        assert_eq!(protein.centroid(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn backbone_names() {
        assert!(is_backbone_atom("CA"));
        assert!(is_backbone_atom("O"));
        assert!(!is_backbone_atom("CB"));
        assert!(!is_backbone_atom("HA"));
    }
}
