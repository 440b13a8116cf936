//! Axis-aligned rectangles, the faces of a [`Cuboid`](crate::Cuboid).

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes spanning a plane perpendicular to this one.
    fn others(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (0, 2),
            Axis::Z => (0, 1),
        }
    }

    fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// A finite rectangle on the plane `axis = k`.
pub(crate) struct AxisRect {
    axis: Axis,
    k: f32,
    /// Bounds along the first and second in-plane axes
    a: Interval,
    b: Interval,
    /// Outward normal, +axis or -axis
    outward_normal: Vec3,
    material: Arc<dyn Material>,
}

impl AxisRect {
    pub(crate) fn new(
        axis: Axis,
        k: f32,
        a: Interval,
        b: Interval,
        faces_positive: bool,
        material: Arc<dyn Material>,
    ) -> Self {
        let outward_normal = if faces_positive {
            axis.unit()
        } else {
            -axis.unit()
        };

        Self {
            axis,
            k,
            a,
            b,
            outward_normal,
            material,
        }
    }
}

impl Hittable for AxisRect {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let n = self.axis.index();
        let denom = ray.direction()[n];
        // Parallel to the plane
        if denom == 0.0 {
            return None;
        }

        let t = (self.k - ray.origin()[n]) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let (ia, ib) = self.axis.others();
        let p = ray.at(t);
        if !self.a.contains(p[ia]) || !self.b.contains(p[ib]) {
            return None;
        }

        let u = (p[ia] - self.a.min) / self.a.size();
        let v = (p[ib] - self.b.min) / self.b.size();
        Some(HitRecord::new(
            ray,
            t,
            self.outward_normal,
            self.material.as_ref(),
            (u, v),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian};

    fn unit_square(axis: Axis, faces_positive: bool) -> AxisRect {
        AxisRect::new(
            axis,
            0.0,
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
            faces_positive,
            Arc::new(Lambertian::new(Color::ONE)),
        )
    }

    #[test]
    fn test_rect_hit_uv() {
        let rect = unit_square(Axis::Z, true);
        let ray = Ray::new(Vec3::new(0.25, 0.75, 2.0), Vec3::NEG_Z);

        let rec = rect.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.normal, Vec3::Z);
        assert!((rec.u - 0.25).abs() < 1e-6);
        assert!((rec.v - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_rect_misses_outside_bounds() {
        let rect = unit_square(Axis::Y, true);
        let ray = Ray::new(Vec3::new(1.5, 2.0, 0.5), Vec3::NEG_Y);
        assert!(rect.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_rect_parallel_ray_misses() {
        let rect = unit_square(Axis::X, true);
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.5), Vec3::Y);
        assert!(rect.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_rect_back_face() {
        let rect = unit_square(Axis::X, false);
        // Travelling along -X hits the side whose outward normal is -X from behind
        let ray = Ray::new(Vec3::new(1.0, 0.5, 0.5), Vec3::NEG_X);

        let rec = rect.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::X);
    }
}
