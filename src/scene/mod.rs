//! Scene assembly: everything one frame needs, as plain data.
//!
//! A [`Scene`] is rebuilt from scratch whenever its inputs change. It holds
//! the primitives for the active view mode plus lights, camera and the
//! model rotation. [`ViewState`] owns the inputs and tracks when a rebuild
//! is due.

mod camera;
mod export;
mod state;

pub use camera::{Camera, CameraUniform};
pub use export::{export_file_name, export_scene};
use glam::Vec3;
use serde::{Deserialize, Serialize};
pub use state::ViewState;

use crate::color::{ColorResolver, ColorScheme, ColorTarget};
use crate::filter::DisplayFilter;
use crate::geometry::atoms::{
    ball_and_stick, space_filling, AtomStyle, DisplayAtom, DisplayBond,
};
use crate::geometry::cartoon::{build_segment, CartoonPiece};
use crate::geometry::molecule::{build_molecule_view, MoleculeSphere};
use crate::geometry::surface::{build_surface, SurfacePlaceholder};
use crate::geometry::{CylinderInstance, Mesh, SphereInstance};
use crate::options::{
    DisplayOptions, Environment, LightingOptions, Options, ViewMode,
};
use crate::secondary_structure::segment_protein;
use crate::structure::{Molecule, Protein};

/// Length of each axis of the axes helper.
pub const AXES_LENGTH: f32 = 50.0;

/// Side length of the ground grid.
pub const GRID_SIZE: f32 = 100.0;

/// Grid cells per side.
pub const GRID_DIVISIONS: u32 = 100;

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// One drawable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Swept cartoon mesh for one secondary-structure segment.
    Cartoon(CartoonPiece),
    /// Protein atom spheres tessellated with `detail` segments.
    Atoms {
        /// Sphere segments around and pole to pole.
        detail: u32,
        /// Retained atoms.
        atoms: Vec<DisplayAtom>,
    },
    /// Bond cylinders.
    Bonds {
        /// Retained bonds.
        bonds: Vec<DisplayBond>,
    },
    /// Small-molecule atom spheres.
    MoleculeAtoms {
        /// Sphere segments around and pole to pole.
        detail: u32,
        /// One sphere per atom.
        spheres: Vec<MoleculeSphere>,
    },
    /// Translucent placeholder surface.
    Surface(SurfacePlaceholder),
    /// X/Y/Z axes helper at the origin.
    Axes {
        /// Length of each axis.
        length: f32,
    },
    /// Ground grid in the XZ plane.
    Grid {
        /// Side length.
        size: f32,
        /// Cells per side.
        divisions: u32,
    },
}

impl Primitive {
    /// Triangle mesh carried by this primitive, if any.
    #[must_use]
    pub fn mesh(&self) -> Option<&Mesh> {
        match self {
            Self::Cartoon(piece) => Some(&piece.mesh),
            Self::Surface(surface) => Some(&surface.mesh),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Lights
// ---------------------------------------------------------------------------

/// Scene lighting derived from [`LightingOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lights {
    /// Ambient intensity.
    pub ambient: f32,
    /// Point light position.
    pub point_position: Vec3,
    /// Point light intensity.
    pub point_intensity: f32,
    /// Environment map preset.
    pub environment: Environment,
}

impl Lights {
    /// Lights for the given options.
    #[must_use]
    pub fn from_options(lighting: &LightingOptions) -> Self {
        Self {
            ambient: lighting.ambient_intensity(),
            point_position: Vec3::from_array(lighting.point_light_position),
            point_intensity: lighting.intensity,
            environment: lighting.environment,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Counts reported by the stats overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneStats {
    /// Number of primitives.
    pub primitives: usize,
    /// Mesh vertices across all primitives.
    pub vertices: usize,
    /// Mesh triangles across all primitives.
    pub triangles: usize,
    /// Instanced spheres.
    pub spheres: usize,
    /// Instanced cylinders.
    pub cylinders: usize,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Structure or molecule name.
    pub title: String,
    /// Active view mode (always ball-and-stick for molecules).
    pub mode: ViewMode,
    /// Active color scheme.
    pub color_scheme: ColorScheme,
    /// Drawables, in draw order.
    pub primitives: Vec<Primitive>,
    /// Lighting.
    pub lights: Lights,
    /// Camera.
    pub camera: Camera,
    /// Model rotation about Y in radians.
    pub rotation_y: f32,
}

impl Scene {
    fn new(title: String, options: &Options, mode: ViewMode) -> Self {
        Self {
            title,
            mode,
            color_scheme: options.display.color_scheme,
            primitives: Vec::new(),
            lights: Lights::from_options(&options.lighting),
            camera: Camera::from_options(&options.camera),
            rotation_y: 0.0,
        }
    }

    fn push_helpers(&mut self, display: &DisplayOptions) {
        if display.show_axes {
            self.primitives.push(Primitive::Axes {
                length: AXES_LENGTH,
            });
            self.primitives.push(Primitive::Grid {
                size: GRID_SIZE,
                divisions: GRID_DIVISIONS,
            });
        }
    }

    /// Every triangle mesh in the scene.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.primitives.iter().filter_map(Primitive::mesh)
    }

    /// Sphere instances for every atom primitive.
    #[must_use]
    pub fn sphere_instances(&self) -> Vec<SphereInstance> {
        let mut out = Vec::new();
        for primitive in &self.primitives {
            match primitive {
                Primitive::Atoms { atoms, .. } => {
                    out.extend(atoms.iter().map(DisplayAtom::to_instance));
                }
                Primitive::MoleculeAtoms { spheres, .. } => {
                    out.extend(spheres.iter().map(MoleculeSphere::to_instance));
                }
                _ => {}
            }
        }
        out
    }

    /// Cylinder instances for every bond primitive.
    #[must_use]
    pub fn cylinder_instances(&self) -> Vec<CylinderInstance> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Bonds { bonds } => Some(bonds),
                _ => None,
            })
            .flatten()
            .map(DisplayBond::to_instance)
            .collect()
    }

    /// Primitive, vertex and instance counts.
    #[must_use]
    pub fn stats(&self) -> SceneStats {
        let (vertices, triangles) = self.meshes().fold((0, 0), |(v, t), m| {
            (v + m.vertices.len(), t + m.triangle_count())
        });
        SceneStats {
            primitives: self.primitives.len(),
            vertices,
            triangles,
            spheres: self.sphere_instances().len(),
            cylinders: self.cylinder_instances().len(),
        }
    }
}

fn resolver(display: &DisplayOptions) -> ColorResolver {
    ColorResolver::new(display.color_scheme)
        .with_random_b_factor_fallback(display.random_b_factor_fallback)
}

fn cartoon_primitives(
    protein: &Protein,
    colors: &ColorResolver,
    options: &Options,
) -> Vec<Primitive> {
    segment_protein(protein)
        .iter()
        .filter_map(|segment| {
            let color = colors.resolve(&ColorTarget {
                chain_id: Some(segment.chain_id),
                ss: Some(segment.ss),
                ..ColorTarget::default()
            });
            build_segment(segment, color, &options.geometry)
        })
        .map(Primitive::Cartoon)
        .collect()
}

/// Scene for `protein` in the configured view mode.
#[must_use]
pub fn build_protein_scene(protein: &Protein, options: &Options) -> Scene {
    let display = &options.display;
    let title = protein.name.clone().unwrap_or_default();
    let mut scene = Scene::new(title, options, display.mode);
    let colors = resolver(display);
    let style = AtomStyle {
        filter: DisplayFilter::from_display(display),
        colors: &colors,
        geometry: &options.geometry,
        atom_scale: display.clamped_atom_scale(),
        bond_scale: display.clamped_bond_scale(),
    };
    let detail = display.quality.protein_detail();

    match display.mode {
        ViewMode::Cartoon => {
            scene.primitives = cartoon_primitives(protein, &colors, options);
        }
        ViewMode::BallAndStick => {
            let (atoms, bonds) = ball_and_stick(protein, &style);
            scene.primitives.push(Primitive::Atoms { detail, atoms });
            scene.primitives.push(Primitive::Bonds { bonds });
        }
        ViewMode::SpaceFilling => {
            let atoms = space_filling(protein, &style);
            scene.primitives.push(Primitive::Atoms { detail, atoms });
        }
        ViewMode::Surface => {
            let surface = build_surface(protein, &colors, &options.geometry);
            scene.primitives.push(Primitive::Surface(surface));
        }
    }
    scene.push_helpers(display);
    log::debug!(
        "built {} scene with {} primitives",
        display.mode,
        scene.primitives.len()
    );
    scene
}

/// Scene for a small molecule: element-colored spheres and gray bonds.
#[must_use]
pub fn build_molecule_scene(molecule: &Molecule, options: &Options) -> Scene {
    let display = &options.display;
    let title = molecule
        .name
        .clone()
        .or_else(|| molecule.formula.clone())
        .unwrap_or_default();
    let mut scene = Scene::new(title, options, ViewMode::BallAndStick);
    let (spheres, bonds) = build_molecule_view(
        molecule,
        display.clamped_atom_scale(),
        display.clamped_bond_scale(),
        &options.geometry,
    );
    scene.primitives.push(Primitive::MoleculeAtoms {
        detail: display.quality.molecule_segments(),
        spheres,
    });
    scene.primitives.push(Primitive::Bonds { bonds });
    scene.push_helpers(display);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Quality;
    use crate::store::presets::preset;
    use crate::store::StructureStore;

    fn options(mode: ViewMode) -> Options {
        let mut options = Options::default();
        options.display.mode = mode;
        options
    }

    #[test]
    fn cartoon_scene_has_one_piece_per_segment() {
        let store = StructureStore::default();
        let crambin = store.get("1cbn").unwrap();
        let scene = build_protein_scene(crambin, &options(ViewMode::Cartoon));
        assert_eq!(scene.title, "Crambin");
        assert_eq!(scene.primitives.len(), 6);
        let stats = scene.stats();
        assert!(stats.triangles > 0);
        assert_eq!(stats.spheres, 0);
        // Chain A under the default chain scheme.
        let chain_a = crate::color::palette::chain_color("A");
        assert!(matches!(
            &scene.primitives[0],
            Primitive::Cartoon(piece) if piece.color == chain_a
        ));
    }

    #[test]
    fn ball_and_stick_respects_filter_and_quality() {
        let store = StructureStore::default();
        let peptide = store.get("peptide").unwrap();
        let mut opts = options(ViewMode::BallAndStick);
        opts.display.quality = Quality::High;
        let scene = build_protein_scene(peptide, &opts);
        // Backbone heavy atoms of three residues, water hidden.
        assert!(matches!(
            &scene.primitives[0],
            Primitive::Atoms { detail: 15, atoms } if atoms.len() == 12
        ));
        // N-CA, CA-C, C-O per residue, plus CA-CB for ALA and SER since
        // one end is on the backbone.
        assert_eq!(scene.stats().cylinders, 11);

        opts.display.show_side_chains = true;
        opts.display.show_hydrogens = true;
        opts.display.show_water = true;
        let full = build_protein_scene(peptide, &opts);
        assert_eq!(full.stats().spheres, 7 + 9 + 6 + 3);
    }

    #[test]
    fn space_filling_and_surface() {
        let store = StructureStore::default();
        let ubq = store.get("1ubq").unwrap();
        let scene = build_protein_scene(ubq, &options(ViewMode::SpaceFilling));
        assert_eq!(scene.stats().spheres, 10);
        assert_eq!(scene.stats().cylinders, 0);
        assert_eq!(scene.sphere_instances()[0].radius(), 1.7);

        let surface = build_protein_scene(ubq, &options(ViewMode::Surface));
        assert_eq!(surface.primitives.len(), 1);
        assert!(matches!(surface.primitives[0], Primitive::Surface(_)));
    }

    #[test]
    fn helpers_and_lights() {
        let mut opts = options(ViewMode::Surface);
        opts.display.show_axes = true;
        opts.lighting.intensity = 2.0;
        let scene = build_protein_scene(&Protein::default(), &opts);
        assert!(scene
            .primitives
            .contains(&Primitive::Axes { length: 50.0 }));
        assert!(scene.primitives.contains(&Primitive::Grid {
            size: 100.0,
            divisions: 100
        }));
        assert_eq!(scene.lights.ambient, 1.0);
        assert_eq!(scene.lights.point_intensity, 2.0);
        assert_eq!(scene.lights.point_position, Vec3::splat(10.0));
    }

    #[test]
    fn molecule_scene() {
        let mut opts = Options::default();
        opts.display.quality = Quality::Low;
        let scene = build_molecule_scene(&preset("CH4").unwrap(), &opts);
        assert_eq!(scene.title, "Methane");
        assert_eq!(scene.mode, ViewMode::BallAndStick);
        let stats = scene.stats();
        assert_eq!((stats.spheres, stats.cylinders), (5, 4));
        assert!(matches!(
            scene.primitives[0],
            Primitive::MoleculeAtoms { detail: 16, .. }
        ));
    }
}
