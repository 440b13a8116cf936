use lumen_core::SceneError;
use lumen_math::Vec3;
use thiserror::Error;

/// Errors raised while building renderable geometry, materials or cameras.
///
/// All of these are detected before rendering starts; tracing itself
/// cannot fail.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Box corners {min:?} and {max:?} must be finite and span every axis")]
    DegenerateBox { min: Vec3, max: Vec3 },

    #[error("Refractive index must be positive and finite, got {0}")]
    InvalidRefractiveIndex(f32),

    #[error("Invalid camera: {0}")]
    InvalidCamera(&'static str),

    #[error("Invalid render settings: {0}")]
    InvalidSettings(&'static str),
}

/// Result type for renderer construction.
pub type RenderResult<T> = Result<T, RenderError>;
