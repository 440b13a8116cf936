//! Built-in demo scene.
//!
//! A ground sphere, a large box, a faint blue light far off to the left and
//! eight diagonal rows of ten metal spheres forming a cage around the box.

use lumen_core::{
    Background, CameraDescription, MaterialDescription, RenderSettings, SceneDescription, Shape,
};
use lumen_math::Vec3;

const ROW_LENGTH: usize = 10;
const ROW_SPHERE_RADIUS: f32 = 0.8;

/// Each row starts at `start` and steps by `step` per sphere.
const ROWS: [(Vec3, Vec3, &str); 8] = [
    (Vec3::new(-5.0, 0.0, -3.0), Vec3::new(1.0, 1.0, 0.0), "copper"),
    (Vec3::new(5.0, 0.0, -3.0), Vec3::new(-1.0, 1.0, 0.0), "steel"),
    (Vec3::new(-5.0, 0.0, -13.0), Vec3::new(1.0, 1.0, 0.0), "copper"),
    (Vec3::new(5.0, 0.0, -13.0), Vec3::new(-1.0, 1.0, 0.0), "steel"),
    (Vec3::new(-5.0, 0.0, -13.0), Vec3::new(0.0, 1.0, 1.0), "copper"),
    (Vec3::new(-5.0, 0.0, -3.0), Vec3::new(0.0, 1.0, -1.0), "steel"),
    (Vec3::new(5.0, 0.0, -13.0), Vec3::new(0.0, 1.0, 1.0), "copper"),
    (Vec3::new(5.0, 0.0, -3.0), Vec3::new(0.0, 1.0, -1.0), "steel"),
];

/// Build the demo scene description.
pub fn demo_scene() -> SceneDescription {
    let camera = CameraDescription {
        look_from: Vec3::new(-12.0, 18.0, 10.0),
        look_at: Vec3::new(-2.0, 0.0, -1.0),
        up: Vec3::Y,
        vfov_degrees: 100.0,
        aperture: 0.1,
        focus_distance: 10.0,
    };

    let mut scene = SceneDescription::new("demo", camera);
    scene.background = Background::Solid {
        color: Vec3::splat(0.7),
    };
    scene.render = RenderSettings::default();

    let ground = scene.add_material(
        "ground",
        MaterialDescription::Lambertian {
            albedo: Vec3::new(0.8, 0.8, 0.0),
        },
    );
    let brick = scene.add_material(
        "brick",
        MaterialDescription::Lambertian {
            albedo: Vec3::new(0.7, 0.3, 0.3),
        },
    );
    scene.add_material(
        "steel",
        MaterialDescription::Metal {
            albedo: Vec3::splat(0.8),
            fuzz: 0.0,
        },
    );
    scene.add_material(
        "copper",
        MaterialDescription::Metal {
            albedo: Vec3::new(0.8, 0.6, 0.2),
            fuzz: 0.0,
        },
    );
    let lamp = scene.add_material(
        "lamp",
        MaterialDescription::DiffuseLight {
            emit: Vec3::new(0.0, 0.0, 0.2),
        },
    );

    scene.add_object(
        Shape::Sphere {
            center: Vec3::new(0.0, -100.5, -1.0),
            radius: 100.0,
        },
        ground,
    );
    scene.add_object(
        Shape::Box {
            min: Vec3::new(0.0, 0.0, -1.0),
            max: Vec3::new(10.0, 10.0, 10.0),
        },
        brick,
    );
    scene.add_object(
        Shape::Sphere {
            center: Vec3::new(-50.0, 50.0, -5.0),
            radius: 10.0,
        },
        lamp,
    );

    for (start, step, material) in ROWS {
        for i in 0..ROW_LENGTH {
            scene.add_object(
                Shape::Sphere {
                    center: start + step * i as f32,
                    radius: ROW_SPHERE_RADIUS,
                },
                material,
            );
        }
    }

    scene
}
