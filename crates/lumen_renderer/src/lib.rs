//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer: spheres and boxes, diffuse, metal, glass and
//! emissive materials, a thin-lens camera and a recursive integrator.
//! Images are rendered in buckets in parallel with rayon.

mod bucket;
mod camera;
mod cuboid;
mod error;
mod hittable;
mod material;
mod rect;
mod renderer;
mod sampling;
mod sphere;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult};
pub use camera::{Camera, CameraBuilder};
pub use cuboid::Cuboid;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{
    background_color, color_to_rgb, linear_to_gamma, ray_color, render, render_pixel,
    ImageBuffer, T_MIN,
};
pub use sampling::{gen_f32, random_in_unit_disk, random_in_unit_sphere, random_unit_vector};
pub use sphere::Sphere;
pub use world::World;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
