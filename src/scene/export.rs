use std::path::{Path, PathBuf};

use super::Scene;
use crate::error::MolscopeError;
use crate::options::ViewMode;

/// `<id>-<mode>.json`, e.g. `1cbn-cartoon.json`.
#[must_use]
pub fn export_file_name(id: &str, mode: ViewMode) -> String {
    format!("{}-{mode}.json", id.trim())
}

/// Write `scene` as pretty JSON into `dir`, named after `id` and the scene
/// mode. The directory is created if missing. Returns the written path.
pub fn export_scene(
    scene: &Scene,
    id: &str,
    dir: &Path,
) -> Result<PathBuf, MolscopeError> {
    let json = serde_json::to_string_pretty(scene)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(id, scene.mode));
    std::fs::write(&path, json)?;
    log::info!("exported {} to {}", scene.title, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::scene::build_protein_scene;
    use crate::store::StructureStore;

    #[test]
    fn file_name_from_id_and_mode() {
        assert_eq!(
            export_file_name("1cbn", ViewMode::Cartoon),
            "1cbn-cartoon.json"
        );
        assert_eq!(
            export_file_name(" 6vxx ", ViewMode::BallAndStick),
            "6vxx-ball-and-stick.json"
        );
    }

    #[test]
    fn exported_scene_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = StructureStore::default();
        let scene =
            build_protein_scene(store.get("3eiy").unwrap(), &Options::default());
        let path = export_scene(&scene, "3eiy", &dir.path().join("out")).unwrap();
        assert!(path.ends_with("out/3eiy-cartoon.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let back: Scene = serde_json::from_str(&text).unwrap();
        assert_eq!(back.title, "Lysozyme");
        assert_eq!(back.primitives.len(), scene.primitives.len());
    }
}
