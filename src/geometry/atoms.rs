//! Atom views: ball-and-stick and space-filling.
//!
//! Both views draw the same filtered atom set. Ball-and-stick shrinks each
//! sphere to a fraction of its radius and adds a gray cylinder per retained
//! bond; space-filling uses full radii and no bonds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bond::BondTransform;
use super::{CylinderInstance, SphereInstance};
use crate::color::{palette::BOND_GRAY, Color, ColorResolver, ColorTarget};
use crate::filter::{AtomRef, DisplayFilter};
use crate::options::GeometryOptions;
use crate::structure::Protein;

/// A retained atom ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayAtom {
    /// Owning chain.
    pub chain_id: String,
    /// Three-letter residue code.
    pub residue_name: String,
    /// Index of the residue within its chain.
    pub residue_index: usize,
    /// Atom name within the residue.
    pub atom_name: String,
    /// Element symbol.
    pub element: String,
    /// Center.
    pub position: Vec3,
    /// Drawn radius after scaling.
    pub radius: f32,
    /// Resolved color.
    pub color: Color,
}

impl DisplayAtom {
    /// GPU instance.
    #[must_use]
    pub fn to_instance(&self) -> SphereInstance {
        SphereInstance::new(self.position, self.radius, self.color)
    }
}

/// A retained bond ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayBond {
    /// First endpoint.
    pub start: Vec3,
    /// Second endpoint.
    pub end: Vec3,
    /// Cylinder placement.
    pub transform: BondTransform,
    /// Cylinder radius.
    pub radius: f32,
    /// Cylinder color, always [`BOND_GRAY`].
    pub color: Color,
}

impl DisplayBond {
    /// Bond cylinder between `start` and `end`.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        Self {
            start,
            end,
            transform: BondTransform::between(start, end),
            radius,
            color: BOND_GRAY,
        }
    }

    /// GPU instance.
    #[must_use]
    pub fn to_instance(&self) -> CylinderInstance {
        self.transform.to_instance(self.radius, self.color)
    }
}

/// Everything needed to resolve and scale atoms.
#[derive(Debug, Clone, Copy)]
pub struct AtomStyle<'a> {
    /// Which atoms to keep.
    pub filter: DisplayFilter,
    /// Color under the active scheme.
    pub colors: &'a ColorResolver,
    /// Geometry constants.
    pub geometry: &'a GeometryOptions,
    /// User atom size multiplier.
    pub atom_scale: f32,
    /// User bond size multiplier.
    pub bond_scale: f32,
}

impl AtomStyle<'_> {
    fn display_atom(&self, atom_ref: &AtomRef<'_>, radius_factor: f32) -> DisplayAtom {
        let atom = atom_ref.atom;
        let target = ColorTarget {
            element: Some(&atom.element),
            residue_name: Some(&atom_ref.residue.name),
            chain_id: Some(&atom_ref.chain.id),
            ss: Some(atom_ref.residue.ss_type()),
            b_factor: atom.b_factor,
        };
        let radius = atom.radius.unwrap_or(self.geometry.default_atom_radius);
        DisplayAtom {
            chain_id: atom_ref.chain.id.clone(),
            residue_name: atom_ref.residue.name.clone(),
            residue_index: atom_ref.residue_index,
            atom_name: atom_ref.name.to_owned(),
            element: atom.element.clone(),
            position: atom.position(),
            radius: radius * radius_factor * self.atom_scale,
            color: self.colors.resolve(&target),
        }
    }

    fn atoms(&self, protein: &Protein, radius_factor: f32) -> Vec<DisplayAtom> {
        self.filter
            .atoms(protein)
            .map(|a| self.display_atom(&a, radius_factor))
            .collect()
    }
}

/// Scaled spheres plus bond cylinders.
#[must_use]
pub fn ball_and_stick(
    protein: &Protein,
    style: &AtomStyle<'_>,
) -> (Vec<DisplayAtom>, Vec<DisplayBond>) {
    let atoms = style.atoms(protein, style.geometry.ball_scale);
    let radius = style.geometry.bond_radius * style.bond_scale;
    let bonds = style
        .filter
        .bonds(protein)
        .map(|b| DisplayBond::new(b.start.position(), b.end.position(), radius))
        .collect();
    (atoms, bonds)
}

/// Full-radius spheres, no bonds.
#[must_use]
pub fn space_filling(protein: &Protein, style: &AtomStyle<'_>) -> Vec<DisplayAtom> {
    style.atoms(protein, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;
    use crate::structure::{Atom, Chain, Residue};

    fn protein() -> Protein {
        let residue = Residue::new("SER", "E")
            .with_atom("N", Atom::new("N", Vec3::ZERO))
            .with_atom("CA", Atom::new("C", Vec3::X * 1.5).with_radius(1.7))
            .with_atom("CB", Atom::new("C", Vec3::new(2.0, 1.0, 0.0)))
            .with_atom("HA", Atom::new("H", Vec3::new(1.5, -1.0, 0.0)))
            .with_bond("N", "CA")
            .with_bond("CA", "CB")
            .with_bond("CA", "HA");
        Protein {
            chains: vec![Chain::new("A", vec![residue])],
            ..Protein::default()
        }
    }

    fn style<'a>(
        colors: &'a ColorResolver,
        geometry: &'a GeometryOptions,
        filter: DisplayFilter,
    ) -> AtomStyle<'a> {
        AtomStyle {
            filter,
            colors,
            geometry,
            atom_scale: 1.0,
            bond_scale: 1.0,
        }
    }

    #[test]
    fn ball_and_stick_scales_radii() {
        let colors = ColorResolver::new(ColorScheme::Cpk);
        let geo = GeometryOptions::default();
        let (atoms, bonds) =
            ball_and_stick(&protein(), &style(&colors, &geo, DisplayFilter::default()));
        let names: Vec<&str> = atoms.iter().map(|a| a.atom_name.as_str()).collect();
        assert_eq!(names, ["N", "CA"]);
        assert!((atoms[0].radius - 0.3).abs() < 1e-6);
        assert!((atoms[1].radius - 0.51).abs() < 1e-6);
        assert_eq!(atoms[0].color, Color::hex(0x3050F8));
        // N–CA and CA–CB survive; the hydrogen bond does not.
        assert_eq!(bonds.len(), 2);
        assert!(bonds.iter().all(|b| b.color == BOND_GRAY && b.radius == 0.1));
    }

    #[test]
    fn bond_color_ignores_scheme() {
        let geo = GeometryOptions::default();
        for scheme in ColorScheme::ALL {
            let colors = ColorResolver::new(scheme);
            let (_, bonds) =
                ball_and_stick(&protein(), &style(&colors, &geo, DisplayFilter::show_all()));
            assert_eq!(bonds.len(), 3);
            assert!(bonds.iter().all(|b| b.color == BOND_GRAY));
        }
    }

    #[test]
    fn space_filling_uses_full_radius() {
        let colors = ColorResolver::new(ColorScheme::ChainId);
        let geo = GeometryOptions::default();
        let mut s = style(&colors, &geo, DisplayFilter::show_all());
        s.atom_scale = 2.0;
        let atoms = space_filling(&protein(), &s);
        assert_eq!(atoms.len(), 4);
        assert_eq!(atoms[0].radius, 2.0);
        assert!((atoms[1].radius - 3.4).abs() < 1e-6);
        assert!(atoms.iter().all(|a| a.color == Color::hex(0x1ABC9C)));
    }

    #[test]
    fn instances_match_display_records() {
        let colors = ColorResolver::new(ColorScheme::Cpk);
        let geo = GeometryOptions::default();
        let (atoms, bonds) =
            ball_and_stick(&protein(), &style(&colors, &geo, DisplayFilter::default()));
        let inst = atoms[1].to_instance();
        assert_eq!(inst.position(), Vec3::X * 1.5);
        assert_eq!(inst.radius(), atoms[1].radius);
        assert_eq!(bonds[0].to_instance().position[3], 1.5);
    }
}
