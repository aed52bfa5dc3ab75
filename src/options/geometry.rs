use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Shape constants for cartoon, atom and surface primitives.
pub struct GeometryOptions {
    /// Radius of the synthesized helix spiral around its axis.
    pub helix_radius: f32,
    /// Tube radius swept along the helix spiral.
    pub helix_tube_radius: f32,
    /// Residues per full helix turn.
    pub residues_per_turn: f32,
    /// Spiral samples per residue.
    pub helix_samples_per_residue: u32,
    /// Sheet ribbon width.
    pub sheet_width: f32,
    /// Sheet ribbon thickness.
    #[schemars(skip)]
    pub sheet_thickness: f32,
    /// Loop tube radius.
    pub loop_radius: f32,
    /// Samples along a swept curve.
    #[schemars(range(min = 8, max = 256))]
    pub tubular_segments: u32,
    /// Vertices around a tube cross-section.
    #[schemars(range(min = 3, max = 32))]
    pub radial_segments: u32,
    /// Fraction of atomic radius used for ball-and-stick spheres.
    pub ball_scale: f32,
    /// Bond cylinder radius in protein views.
    pub bond_radius: f32,
    /// Bond cylinder radius in molecule views.
    pub molecule_bond_radius: f32,
    /// Radius of the placeholder surface sphere.
    pub surface_radius: f32,
    /// Opacity of the placeholder surface.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub surface_opacity: f32,
    /// Radius for atoms that carry none.
    pub default_atom_radius: f32,
    /// Atom name standing in for a whole residue.
    #[schemars(skip)]
    pub reference_atom: String,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            helix_radius: 1.5,
            helix_tube_radius: 1.2,
            residues_per_turn: 3.6,
            helix_samples_per_residue: 3,
            sheet_width: 2.5,
            sheet_thickness: 0.3,
            loop_radius: 0.6,
            tubular_segments: 64,
            radial_segments: 8,
            ball_scale: 0.3,
            bond_radius: 0.1,
            molecule_bond_radius: 0.1,
            surface_radius: 20.0,
            surface_opacity: 0.7,
            default_atom_radius: 1.0,
            reference_atom: "CA".to_owned(),
        }
    }
}
