use thiserror::Error;

/// Errors that can occur while loading or validating a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Material defined more than once: {0}")]
    DuplicateMaterial(String),

    #[error("Object {index} references unknown material: {name}")]
    UnknownMaterial { index: usize, name: String },

    #[error("Material at position {0} has an empty name")]
    EmptyMaterialName(usize),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
