// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{near_zero, reflect, refract};
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_componentwise_product() {
        // Attenuation blends colors channel by channel
        let albedo = Vec3::new(0.5, 0.25, 1.0);
        let light = Vec3::new(2.0, 4.0, 0.5);
        assert_eq!(albedo * light, Vec3::new(1.0, 1.0, 0.5));
    }

    #[test]
    fn test_vec3_cross_is_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    }
}
