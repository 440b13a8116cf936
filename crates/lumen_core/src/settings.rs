//! Render settings consumed by the driver.

use serde::{Deserialize, Serialize};

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Image size and sampling parameters.
///
/// Defaults mirror a 1080p, 16:9 render with 100 samples per pixel and
/// five bounces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub image_width: u32,
    /// Width over height; also the camera's viewport aspect ratio
    pub aspect_ratio: f32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for the per-bucket random number generators
    pub seed: u64,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 1920,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 5,
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderSettings {
    /// Image height derived from the width and aspect ratio (truncated).
    pub fn image_height(&self) -> u32 {
        (self.image_width as f32 / self.aspect_ratio) as u32
    }

    /// Set image width and aspect ratio.
    pub fn with_resolution(mut self, width: u32, aspect_ratio: f32) -> Self {
        self.image_width = width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
