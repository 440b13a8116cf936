//! Axis-aligned box built from six rectangles.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable, HittableList},
    rect::{Axis, AxisRect},
    Material, Ray, RenderError, RenderResult,
};
use lumen_math::{Interval, Vec3};

/// An axis-aligned box.
///
/// The six faces share the box's material and each reports the outward
/// axis normal of its side.
pub struct Cuboid {
    min: Vec3,
    max: Vec3,
    sides: HittableList,
}

impl Cuboid {
    /// Create a box from two opposite corners, in any order.
    ///
    /// Fails if a corner is not finite or the box is flat along any axis.
    pub fn new(a: Vec3, b: Vec3, material: Arc<dyn Material>) -> RenderResult<Self> {
        let min = a.min(b);
        let max = a.max(b);
        if !min.is_finite() || !max.is_finite() || (max - min).min_element() <= 0.0 {
            return Err(RenderError::DegenerateBox { min: a, max: b });
        }

        let x = Interval::new(min.x, max.x);
        let y = Interval::new(min.y, max.y);
        let z = Interval::new(min.z, max.z);

        let faces = [
            AxisRect::new(Axis::Z, max.z, x, y, true, material.clone()),
            AxisRect::new(Axis::Z, min.z, x, y, false, material.clone()),
            AxisRect::new(Axis::Y, max.y, x, z, true, material.clone()),
            AxisRect::new(Axis::Y, min.y, x, z, false, material.clone()),
            AxisRect::new(Axis::X, max.x, y, z, true, material.clone()),
            AxisRect::new(Axis::X, min.x, y, z, false, material),
        ];

        let mut sides = HittableList::new();
        for face in faces {
            sides.add(Arc::new(face));
        }

        Ok(Self { min, max, sides })
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }
}

impl Hittable for Cuboid {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.sides.hit(ray, ray_t)
    }
}
