//! Lumen Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `MaterialDescription`,
//!   `Shape`, `CameraDescription`, `Background`
//! - **Render settings**: `RenderSettings`
//! - **Loading**: JSON scene files via serde
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/glass_and_light.json")?;
//! println!("Loaded {} materials, {} objects",
//!     scene.materials.len(),
//!     scene.objects.len());
//! ```

pub mod error;
pub mod loader;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use loader::load_scene;
pub use scene::{
    Background, CameraDescription, MaterialDescription, NamedMaterial, ObjectDescription,
    SceneDescription, Shape,
};
pub use settings::{RenderSettings, DEFAULT_BUCKET_SIZE};
