use std::path::{Path, PathBuf};

use super::{build_protein_scene, export_scene, Camera, Scene};
use crate::error::MolscopeError;
use crate::info::ProteinSummary;
use crate::options::{DisplayOptions, LightingOptions, Options};
use crate::store::StructureStore;
use crate::structure::Protein;

/// Structure shown before anything is selected.
pub const INITIAL_STRUCTURE: &str = "1cbn";

/// Viewer state: the loaded structure, toggles, camera and spin.
///
/// Every input to [`Self::build_scene`] lives here. Mutations bump a
/// generation counter so a host can tell when the scene needs rebuilding.
#[derive(Debug, Clone)]
pub struct ViewState {
    store: StructureStore,
    options: Options,
    current_id: &'static str,
    protein: Protein,
    error: Option<String>,
    camera: Camera,
    rotation_y: f32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl ViewState {
    /// State showing [`INITIAL_STRUCTURE`].
    #[must_use]
    pub fn new(options: Options) -> Self {
        let store = StructureStore::new(options.store.clone());
        let protein = store.get(INITIAL_STRUCTURE).cloned().unwrap_or_default();
        Self {
            camera: Camera::from_options(&options.camera),
            store,
            options,
            current_id: INITIAL_STRUCTURE,
            protein,
            error: None,
            rotation_y: 0.0,
            generation: 1,
            rendered_generation: 0,
        }
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether anything changed since the last [`Self::mark_rendered`].
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark the current generation as drawn.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Structure selection --

    /// Identifier of the displayed structure.
    #[must_use]
    pub fn current_id(&self) -> &'static str {
        self.current_id
    }

    /// The displayed structure.
    #[must_use]
    pub fn protein(&self) -> &Protein {
        &self.protein
    }

    /// Message from the last failed lookup, cleared by the next success.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The sample store backing lookups.
    #[must_use]
    pub fn store(&self) -> &StructureStore {
        &self.store
    }

    fn show(&mut self, id: &'static str, protein: Protein) {
        self.current_id = id;
        self.protein = protein;
        self.error = None;
        self.invalidate();
    }

    /// Load a typed identifier through the simulated fetch.
    ///
    /// A blank identifier does nothing and returns `Ok(false)`. On failure
    /// the previous structure stays loaded and the message is kept in
    /// [`Self::error`].
    pub fn submit_identifier(&mut self, id: &str) -> Result<bool, MolscopeError> {
        if id.trim().is_empty() {
            return Ok(false);
        }
        let fetched = self.store.fetch(id).cloned();
        match (fetched, self.store.canonical_id(id)) {
            (Ok(protein), Some(canonical)) => {
                self.show(canonical, protein);
                Ok(true)
            }
            (Ok(_), None) => Ok(false),
            (Err(e), _) => {
                self.error = Some(e.to_string());
                self.invalidate();
                Err(e)
            }
        }
    }

    /// Switch to a sample by identifier without the fetch delay.
    pub fn select_sample(&mut self, id: &str) -> Result<(), MolscopeError> {
        let canonical = self.store.canonical_id(id);
        let protein = self.store.get(id).cloned();
        match (canonical, protein) {
            (Some(canonical), Some(protein)) => {
                self.show(canonical, protein);
                Ok(())
            }
            _ => Err(MolscopeError::UnknownStructure {
                id: id.trim().to_owned(),
                known: self.store.ids().map(str::to_owned).collect(),
            }),
        }
    }

    // -- Options --

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace every option. The camera is reset to the new camera options.
    pub fn set_options(&mut self, options: Options) {
        self.camera = Camera::from_options(&options.camera);
        self.options = options;
        self.invalidate();
    }

    /// Mutable display toggles; marks the state dirty.
    pub fn display_mut(&mut self) -> &mut DisplayOptions {
        self.invalidate();
        &mut self.options.display
    }

    /// Mutable lighting; marks the state dirty.
    pub fn lighting_mut(&mut self) -> &mut LightingOptions {
        self.invalidate();
        &mut self.options.lighting
    }

    // -- Camera and animation --

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Move the camera closer by the configured zoom factor, clamped to
    /// the minimum distance.
    pub fn zoom_in(&mut self) {
        self.camera.zoom(self.options.camera.zoom_factor);
        self.invalidate();
    }

    /// Model rotation about Y in radians.
    #[must_use]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Per-frame tick. Advances the spin when auto-rotate is on and
    /// reports whether anything moved.
    pub fn advance_frame(&mut self) -> bool {
        if !self.options.display.auto_rotate {
            return false;
        }
        self.rotation_y += self.options.camera.auto_rotate_speed;
        self.invalidate();
        true
    }

    // -- Output --

    /// Scene for the current structure, camera and spin.
    #[must_use]
    pub fn build_scene(&self) -> Scene {
        let mut scene = build_protein_scene(&self.protein, &self.options);
        scene.camera = self.camera;
        scene.rotation_y = self.rotation_y;
        scene
    }

    /// Info-panel summary of the current structure.
    #[must_use]
    pub fn summary(&self) -> ProteinSummary {
        ProteinSummary::new(&self.protein, self.current_id)
    }

    /// Export the current scene to `<dir>/<id>-<mode>.json`.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, MolscopeError> {
        export_scene(&self.build_scene(), self.current_id, dir)
    }
}
