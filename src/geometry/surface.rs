//! Placeholder molecular surface.
//!
//! Not a computed solvent-excluded surface: one large translucent sphere
//! stands in for the whole structure.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::sphere::uv_sphere;
use super::Mesh;
use crate::color::{Color, ColorResolver, ColorTarget};
use crate::options::GeometryOptions;
use crate::structure::Protein;

/// Chain whose scheme color tints the surface.
const SURFACE_CHAIN: &str = "A";

/// Tessellation of the placeholder sphere.
const SURFACE_SEGMENTS: u32 = 64;

/// The translucent placeholder sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePlaceholder {
    /// Sphere center (the structure centroid).
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Tint.
    pub color: Color,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Sphere mesh.
    pub mesh: Mesh,
}

/// Placeholder surface for `protein`, tinted with the scheme color of
/// chain `A`.
#[must_use]
pub fn build_surface(
    protein: &Protein,
    colors: &ColorResolver,
    geo: &GeometryOptions,
) -> SurfacePlaceholder {
    let center = protein.centroid();
    SurfacePlaceholder {
        center,
        radius: geo.surface_radius,
        color: colors.resolve(&ColorTarget::chain(SURFACE_CHAIN)),
        opacity: geo.surface_opacity.clamp(0.0, 1.0),
        mesh: uv_sphere(
            center,
            geo.surface_radius,
            SURFACE_SEGMENTS,
            SURFACE_SEGMENTS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{palette, ColorScheme};
    use crate::structure::{Atom, Chain, Residue};

    #[test]
    fn surface_is_one_translucent_sphere() {
        let protein = Protein {
            chains: vec![Chain::new(
                "B",
                vec![
                    Residue::new("GLY", "")
                        .with_atom("CA", Atom::new("C", Vec3::new(4.0, 0.0, 0.0))),
                    Residue::new("GLY", "")
                        .with_atom("CA", Atom::new("C", Vec3::new(0.0, 2.0, 0.0))),
                ],
            )],
            ..Protein::default()
        };
        let colors = ColorResolver::new(ColorScheme::ChainId);
        let surface =
            build_surface(&protein, &colors, &GeometryOptions::default());
        assert_eq!(surface.center, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(surface.radius, 20.0);
        assert_eq!(surface.opacity, 0.7);
        assert_eq!(surface.color, palette::chain_color("A"));
        assert!(!surface.mesh.is_empty());
    }

    #[test]
    fn surface_is_centered_on_the_structure_not_the_origin() {
        let shifted = Vec3::new(30.0, -12.0, 5.0);
        let protein = Protein {
            chains: vec![Chain::new(
                "A",
                vec![Residue::new("GLY", "")
                    .with_atom("CA", Atom::new("C", shifted))],
            )],
            ..Protein::default()
        };
        let colors = ColorResolver::new(ColorScheme::ChainId);
        let surface =
            build_surface(&protein, &colors, &GeometryOptions::default());
        assert_eq!(surface.center, shifted);
        let (min, max) = surface.mesh.bounds().unwrap();
        assert!(((min + max) * 0.5 - shifted).length() < 1e-3);
    }
}
