//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounded bounce depth
//! - Anti-aliasing via multi-sampling
//! - Gamma correction on output

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::sampling::gen_f32;
use crate::{Color, Hittable, Ray, World};
use lumen_core::Background;
use lumen_math::Interval;
use rand::RngCore;
use rayon::prelude::*;

/// Smallest accepted hit distance; avoids re-hitting the surface a ray starts on.
pub const T_MIN: f32 = 0.001;

/// Radiance arriving along a ray that leaves the scene.
pub fn background_color(background: &Background, ray: &Ray) -> Color {
    match *background {
        Background::Solid { color } => color,
        Background::Gradient { horizon, zenith } => {
            let unit_direction = ray.direction().normalize_or_zero();
            let a = 0.5 * (unit_direction.y + 1.0);
            horizon * (1.0 - a) + zenith * a
        }
    }
}

/// Compute the color seen by a ray.
///
/// One Monte Carlo sample of the radiance along a random path: emission at
/// each hit plus the attenuated radiance of the scattered ray, until the
/// ray is absorbed, escapes, or `depth` bounces are used up.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    background: &Background,
    rng: &mut dyn RngCore,
) -> Color {
    // Out of bounces: no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let rec = match world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) {
        Some(rec) => rec,
        None => return background_color(background, ray),
    };

    let emitted = rec.material.emitted(rec.u, rec.v, rec.p);

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let incoming = ray_color(&result.scattered, world, depth - 1, background, rng);
            emitted + result.attenuation * incoming
        }
        None => emitted,
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
///
/// Each channel is `floor(256 * sqrt(c))` clamped to [0, 255].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let to_byte = |c: f32| (256.0 * linear_to_gamma(c).clamp(0.0, 0.999)) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `y` counts rows from the top of the image. Returns the mean of the
/// samples in linear space.
pub fn render_pixel(world: &World, x: u32, y: u32, rng: &mut dyn RngCore) -> Color {
    let (width, height) = world.image_size();
    let settings = world.settings();

    // Viewport t runs bottom to top
    let j = height - 1 - y;
    let s_scale = 1.0 / width.saturating_sub(1).max(1) as f32;
    let t_scale = 1.0 / height.saturating_sub(1).max(1) as f32;

    let mut pixel_color = Color::ZERO;
    for _ in 0..settings.samples_per_pixel {
        let s = (x as f32 + gen_f32(rng)) * s_scale;
        let t = (j as f32 + gen_f32(rng)) * t_scale;
        let ray = world.camera().get_ray(s, t, rng);
        pixel_color += ray_color(
            &ray,
            world.objects(),
            settings.max_depth,
            world.background(),
            rng,
        );
    }

    // Average the samples
    pixel_color / settings.samples_per_pixel as f32
}

/// Image buffer of linear pixel colors, row 0 at the top.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Offset of (x, y) in `pixels`, computed in `usize` so large images
    /// do not wrap.
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[local_y as usize * bucket.width as usize + local_x as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    /// Convert to gamma-corrected RGB bytes, row-major from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire image.
///
/// Buckets are traced in parallel on the current rayon pool, each with its
/// own seeded generator, so the result does not depend on scheduling.
pub fn render(world: &World) -> ImageBuffer {
    let (width, height) = world.image_size();
    let settings = world.settings();

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        settings.samples_per_pixel,
        settings.max_depth
    );
    let start = Instant::now();

    let buckets = generate_buckets(width, height, settings.bucket_size);
    let total = buckets.len();
    let finished = AtomicUsize::new(0);

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, world);
            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("Bucket {} finished ({}/{})", bucket.index, done, total);
            result
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Camera, Dielectric, DiffuseLight, HittableList, Lambertian, Material, Sphere, Vec3,
    };
    use lumen_core::RenderSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn solid(r: f32, g: f32, b: f32) -> Background {
        Background::Solid {
            color: Color::new(r, g, b),
        }
    }

    fn sphere(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Arc<dyn Hittable> {
        Arc::new(Sphere::new(center, radius, material).unwrap())
    }

    fn small_world(objects: HittableList, background: Background) -> World {
        let camera = Camera::builder()
            .with_position(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y)
            .with_aspect_ratio(2.0)
            .build()
            .unwrap();
        let settings = RenderSettings::default()
            .with_resolution(12, 2.0)
            .with_quality(4, 4)
            .with_seed(9);
        World::new(objects, camera, background, settings).unwrap()
    }

    #[test]
    fn test_empty_scene_returns_background() {
        let world = HittableList::new();
        let background = solid(0.2, 0.4, 0.6);
        let mut rng = StdRng::seed_from_u64(1);

        for direction in [Vec3::X, Vec3::NEG_Y, Vec3::new(0.3, -0.2, 0.9)] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert_eq!(
                ray_color(&ray, &world, 5, &background, &mut rng),
                Color::new(0.2, 0.4, 0.6)
            );
        }
    }

    #[test]
    fn test_zero_depth_is_black() {
        let mut world = HittableList::new();
        world.add(sphere(
            Vec3::new(0.0, 0.0, -2.0),
            1.0,
            Arc::new(DiffuseLight::new(Color::ONE)),
        ));
        let background = solid(1.0, 1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);

        // Both a hit and a miss
        for direction in [Vec3::NEG_Z, Vec3::Z] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert_eq!(ray_color(&ray, &world, 0, &background, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_emitter_returns_its_emission() {
        let emission = Color::new(3.0, 2.0, 1.0);
        let mut world = HittableList::new();
        world.add(sphere(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(DiffuseLight::new(emission)),
        ));
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(
            ray_color(&ray, &world, 10, &solid(0.5, 0.5, 0.5), &mut rng),
            emission
        );
    }

    #[test]
    fn test_last_bounce_gathers_nothing() {
        let mut world = HittableList::new();
        world.add(sphere(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(Lambertian::new(Color::splat(0.5))),
        ));
        let mut rng = StdRng::seed_from_u64(1);

        // One bounce: hit the diffuse sphere, then the budget is gone
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(
            ray_color(&ray, &world, 1, &solid(1.0, 1.0, 1.0), &mut rng),
            Color::ZERO
        );
    }

    #[test]
    fn test_index_matched_glass_is_invisible() {
        let mut world = HittableList::new();
        world.add(sphere(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(Dielectric::new(1.0).unwrap()),
        ));
        let background = solid(0.1, 0.2, 0.3);
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.2, -1.0));
        assert_eq!(
            ray_color(&ray, &world, 5, &background, &mut rng),
            Color::new(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn test_gradient_background() {
        let background = Background::Gradient {
            horizon: Color::ONE,
            zenith: Color::new(0.5, 0.7, 1.0),
        };

        let up = background_color(&background, &Ray::new(Vec3::ZERO, Vec3::Y));
        let down = background_color(&background, &Ray::new(Vec3::ZERO, Vec3::NEG_Y));
        assert!((up - Color::new(0.5, 0.7, 1.0)).length() < 1e-6);
        assert!((down - Color::ONE).length() < 1e-6);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::new(0.25, 1.0, 4.0)), [128, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(-1.0, f32::NAN, 0.01)), [0, 0, 25]);
    }

    #[test]
    fn test_image_index_does_not_wrap() {
        // 100000 x 56250 pixels is past u32::MAX; no storage is needed to index it
        let image = ImageBuffer {
            width: 100_000,
            height: 56_250,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(99_999, 56_249), 100_000 * 56_250 - 1);
        assert_eq!(image.index(7, 3), 300_007);
    }

    #[test]
    fn test_image_get_set_roundtrip_by_position() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);
        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.pixels[5], Color::ONE);
        assert_eq!(image.get(1, 1), Color::ZERO);
    }

    #[test]
    fn test_render_enclosed_by_light_is_uniform() {
        let mut objects = HittableList::new();
        objects.add(sphere(
            Vec3::ZERO,
            100.0,
            Arc::new(DiffuseLight::new(Color::splat(0.25))),
        ));
        let world = small_world(objects, solid(0.0, 0.0, 0.0));

        let image = render(&world);
        assert_eq!((image.width, image.height), (12, 6));
        assert!(image.pixels.iter().all(|&c| c == Color::splat(0.25)));
        assert!(image.to_rgb8().iter().all(|&b| b == 128));
    }

    #[test]
    fn test_render_rows_run_top_to_bottom() {
        let background = Background::Gradient {
            horizon: Color::ZERO,
            zenith: Color::ONE,
        };
        let world = small_world(HittableList::new(), background);

        let image = render(&world);
        let top = image.get(6, 0);
        let bottom = image.get(6, image.height - 1);
        assert!(top.x > bottom.x, "top {top:?} should be brighter than bottom {bottom:?}");
    }

    #[test]
    fn test_render_is_deterministic() {
        let build = || {
            let mut objects = HittableList::new();
            objects.add(sphere(
                Vec3::new(0.0, 0.0, -1.0),
                0.5,
                Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3))),
            ));
            objects.add(sphere(
                Vec3::new(0.0, -100.5, -1.0),
                100.0,
                Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
            ));
            small_world(objects, solid(0.7, 0.7, 0.7))
        };

        let a = render(&build());
        let b = render(&build());
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn test_render_pixel_hits_scene() {
        let mut objects = HittableList::new();
        objects.add(sphere(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::splat(0.5))),
        ));
        let world = small_world(objects, solid(0.5, 0.7, 1.0));
        let mut rng = StdRng::seed_from_u64(42);

        // Center pixel looks at the sphere: darker than the sky it reflects
        let color = render_pixel(&world, 5, 3, &mut rng);
        assert!(color.length() > 0.0);
        assert!(color.z < 1.0);
    }
}
