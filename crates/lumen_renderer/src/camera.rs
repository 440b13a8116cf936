//! Thin-lens camera for ray generation.

use crate::sampling::random_in_unit_disk;
use crate::{Ray, RenderError, RenderResult};
use lumen_core::CameraDescription;
use lumen_math::Vec3;
use rand::RngCore;

/// Camera configuration, turned into an immutable [`Camera`] by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CameraBuilder {
    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,           // Vertical field of view in degrees
    aspect_ratio: f32,   // Viewport width over height
    aperture: f32,       // Lens diameter
    focus_dist: f32,     // Distance from camera to plane of perfect focus
}

impl CameraBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the viewport aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Configure from a scene description.
    pub fn from_description(desc: &CameraDescription, aspect_ratio: f32) -> Self {
        Self::new()
            .with_position(desc.look_from, desc.look_at, desc.up)
            .with_lens(desc.vfov_degrees, desc.aperture, desc.focus_distance)
            .with_aspect_ratio(aspect_ratio)
    }

    /// Validate the settings and derive the camera basis and viewport.
    pub fn build(&self) -> RenderResult<Camera> {
        if !(self.look_from.is_finite() && self.look_at.is_finite() && self.vup.is_finite()) {
            return Err(RenderError::InvalidCamera("positions must be finite"));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(RenderError::InvalidCamera(
                "vertical field of view must be between 0 and 180 degrees",
            ));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(RenderError::InvalidCamera("aspect ratio must be positive"));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return Err(RenderError::InvalidCamera("focus distance must be positive"));
        }
        if !(self.aperture.is_finite() && self.aperture >= 0.0) {
            return Err(RenderError::InvalidCamera("aperture must not be negative"));
        }

        let view = self.look_from - self.look_at;
        if view.length_squared() < 1e-12 {
            return Err(RenderError::InvalidCamera("look_from and look_at coincide"));
        }
        let w = view.normalize();

        let side = self.vup.cross(w);
        if side.length_squared() < 1e-12 {
            return Err(RenderError::InvalidCamera(
                "up vector is zero or parallel to the view direction",
            ));
        }
        let u = side.normalize();
        let v = w.cross(u);

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = self.aspect_ratio * viewport_height;

        // Viewport spans the focal plane
        let origin = self.look_from;
        let horizontal = self.focus_dist * viewport_width * u;
        let vertical = self.focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - self.focus_dist * w;

        Ok(Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: self.aperture / 2.0,
        })
    }
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Start configuring a camera.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::new()
    }

    /// Generate a ray through viewport coordinates `(s, t)` in [0, 1]².
    ///
    /// `(0, 0)` is the lower-left corner. With a non-zero aperture the origin
    /// is jittered across the lens disk.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let origin = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.origin + self.u * rd.x + self.v * rd.y
        } else {
            self.origin
        };

        let direction =
            self.lower_left_corner + s * self.horizontal + t * self.vertical - origin;
        Ray::new(origin, direction)
    }

    /// Camera position (lens center).
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orthonormal basis: right, up, backward.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}
