//! Hittable trait and HitRecord for ray-object intersection.

use std::sync::Arc;

use crate::{Material, Ray};
use lumen_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Borrows the material of the object that was hit; the record lives only
/// as long as the query that produced it.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// UV surface coordinates
    pub u: f32,
    pub v: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record for a hit at `t`, orienting `outward_normal` against the ray.
    pub fn new(
        ray: &Ray,
        t: f32,
        outward_normal: Vec3,
        material: &'a dyn Material,
        (u, v): (f32, f32),
    ) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            normal: outward_normal,
            material,
            t,
            u,
            v,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the closest intersection with `t` strictly inside `ray_t`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// An ordered list of shared hittable objects.
#[derive(Clone, Default)]
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;

        for object in &self.objects {
            let closest_so_far = closest.as_ref().map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian, Sphere};

    fn sphere_at(z: f32, albedo: Color) -> Arc<dyn Hittable> {
        let material: Arc<dyn Material> = Arc::new(Lambertian::new(albedo));
        Arc::new(Sphere::new(Vec3::new(0.0, 0.0, z), 0.5, material).unwrap())
    }

    #[test]
    fn test_face_normal_front_and_back() {
        let material = Lambertian::new(Color::ONE);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, &material, (0.0, 0.0));
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);

        let rec = HitRecord::new(&ray, 1.0, Vec3::NEG_Z, &material, (0.0, 0.0));
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(list.is_empty());
        assert!(list.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_list_returns_closest_regardless_of_order() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let interval = Interval::new(0.001, f32::INFINITY);
        let near = sphere_at(-2.0, Color::new(1.0, 0.0, 0.0));
        let far = sphere_at(-5.0, Color::new(0.0, 1.0, 0.0));

        let mut forward = HittableList::new();
        forward.add(near.clone());
        forward.add(far.clone());

        let mut backward = HittableList::new();
        backward.add(far);
        backward.add(near);

        let a = forward.hit(&ray, interval).unwrap();
        let b = backward.hit(&ray, interval).unwrap();
        assert!((a.t - 1.5).abs() < 1e-5);
        assert_eq!(a.t, b.t);
        assert_eq!(a.p, b.p);
    }

    #[test]
    fn test_list_respects_t_max() {
        let mut list = HittableList::new();
        list.add(sphere_at(-5.0, Color::ONE));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(list.hit(&ray, Interval::new(0.001, 4.0)).is_none());
        assert!(list.hit(&ray, Interval::new(0.001, 5.0)).is_some());
    }
}
