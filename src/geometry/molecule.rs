//! Small-molecule view: one sphere per atom, one cylinder per bond.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::atoms::DisplayBond;
use super::SphereInstance;
use crate::color::Color;
use crate::options::GeometryOptions;
use crate::store::elements::{element_radius, element_sphere_color};
use crate::structure::Molecule;

/// A molecule atom ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeSphere {
    /// Index into [`Molecule::atoms`].
    pub index: usize,
    /// Element symbol.
    pub element: String,
    /// Center.
    pub position: Vec3,
    /// Element radius times the atom scale.
    pub radius: f32,
    /// Periodic-table color.
    pub color: Color,
}

impl MoleculeSphere {
    /// GPU instance.
    #[must_use]
    pub fn to_instance(&self) -> SphereInstance {
        SphereInstance::new(self.position, self.radius, self.color)
    }
}

/// Spheres and bond cylinders for `molecule`.
///
/// Sphere color and radius come from the periodic table (white and 0.5 Å
/// for unknown symbols). Bonds whose indices fall outside the atom list
/// are dropped.
#[must_use]
pub fn build_molecule_view(
    molecule: &Molecule,
    atom_scale: f32,
    bond_scale: f32,
    geo: &GeometryOptions,
) -> (Vec<MoleculeSphere>, Vec<DisplayBond>) {
    let spheres = molecule
        .atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| MoleculeSphere {
            index,
            element: atom.element.clone(),
            position: atom.position,
            radius: element_radius(&atom.element) * atom_scale,
            color: element_sphere_color(&atom.element),
        })
        .collect();

    let radius = geo.molecule_bond_radius * bond_scale;
    let bonds: Vec<DisplayBond> = molecule
        .resolved_bonds()
        .map(|(a, b)| DisplayBond::new(a.position, b.position, radius))
        .collect();
    let dropped = molecule.bonds.len() - bonds.len();
    if dropped > 0 {
        log::debug!("skipped {dropped} bonds with out-of-range atom indices");
    }
    (spheres, bonds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette::BOND_GRAY;
    use crate::store::presets::preset;
    use crate::structure::{Bond, MoleculeAtom};

    #[test]
    fn water_view() {
        let geo = GeometryOptions::default();
        let water = preset("H2O").unwrap();
        let (spheres, bonds) = build_molecule_view(&water, 2.0, 1.5, &geo);
        assert_eq!(spheres.len(), 3);
        assert_eq!(spheres[0].color, Color::hex(0xFF0D0D));
        assert!((spheres[0].radius - element_radius("O") * 2.0).abs() < 1e-6);
        assert_eq!(spheres[1].color, Color::hex(0xFFFFFF));
        assert_eq!(bonds.len(), 2);
        assert!(bonds.iter().all(|b| b.color == BOND_GRAY));
        assert!((bonds[0].radius - 0.15).abs() < 1e-6);
        assert_eq!(bonds[0].transform.midpoint, Vec3::new(-0.4, 0.3, 0.0));
    }

    #[test]
    fn unknown_elements_and_dangling_bonds() {
        let geo = GeometryOptions::default();
        let molecule = Molecule {
            atoms: vec![
                MoleculeAtom::new("Qq", Vec3::ZERO),
                MoleculeAtom::new("C", Vec3::X),
            ],
            bonds: vec![Bond::new(0, 1), Bond::new(1, 5)],
            ..Molecule::default()
        };
        let (spheres, bonds) = build_molecule_view(&molecule, 1.0, 1.0, &geo);
        assert_eq!(spheres[0].color, Color::hex(0xFFFFFF));
        assert_eq!(spheres[0].radius, 0.5);
        assert_eq!(bonds.len(), 1);
        assert_eq!(spheres[1].to_instance().radius(), element_radius("C"));
    }

    #[test]
    fn empty_molecule_draws_nothing() {
        let geo = GeometryOptions::default();
        let (spheres, bonds) =
            build_molecule_view(&Molecule::default(), 1.0, 1.0, &geo);
        assert!(spheres.is_empty());
        assert!(bonds.is_empty());
    }
}
