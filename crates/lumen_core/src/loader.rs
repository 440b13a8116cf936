//! Scene file loading.

use std::path::Path;

use crate::error::SceneResult;
use crate::scene::SceneDescription;

/// Load a JSON scene file and validate it.
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let scene = load_scene("scenes/glass_and_light.json")?;
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::debug!("Loading scene from {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let mut scene = SceneDescription::from_json_str(&content)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::debug!(
        "Loaded scene '{}': {} materials, {} objects",
        scene.name,
        scene.materials.len(),
        scene.objects.len()
    );
    Ok(scene)
}
