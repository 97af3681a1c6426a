//! Bounded random rotation and scale perturbations.
use glam::Vec3;
use rand::RngCore;

use crate::sampling::rand01;
use crate::scatter::config::RotationRanges;

/// Draw one Euler rotation offset in degrees, each axis independent.
///
/// A zero-width range yields its bound exactly, so unconfigured axes stay at
/// zero without any special casing.
pub fn random_rotation(ranges: &RotationRanges, rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(
        uniform_in(ranges.x, rng),
        uniform_in(ranges.y, rng),
        uniform_in(ranges.z, rng),
    )
}

/// Draw one scale multiplier and apply it to `base_scale` on all axes.
///
/// A single shared scalar keeps the instance's proportions; per-axis draws
/// would shear the silhouette.
pub fn random_scale(range: (f32, f32), base_scale: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    base_scale * uniform_in(range, rng)
}

#[inline]
fn uniform_in((min, max): (f32, f32), rng: &mut dyn RngCore) -> f32 {
    min + rand01(rng) * (max - min)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn zero_ranges_yield_zero_rotation() {
        let mut rng = StdRng::seed_from_u64(9);
        let rotation = random_rotation(&RotationRanges::default(), &mut rng);
        assert_eq!(rotation, Vec3::ZERO);
    }

    #[test]
    fn rotation_respects_per_axis_bounds() {
        let ranges = RotationRanges::new((-30.0, 30.0), (0.0, 360.0), (-5.0, 0.0));
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..200 {
            let r = random_rotation(&ranges, &mut rng);
            assert!(r.x >= -30.0 && r.x <= 30.0);
            assert!(r.y >= 0.0 && r.y <= 360.0);
            assert!(r.z >= -5.0 && r.z <= 0.0);
        }
    }

    #[test]
    fn unit_scale_range_returns_base_scale_exactly() {
        let base = Vec3::new(2.0, 2.0, 2.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert_eq!(random_scale((1.0, 1.0), base, &mut rng), base);
        }
    }

    #[test]
    fn scale_is_one_shared_scalar_across_axes() {
        let base = Vec3::new(1.0, 2.0, 4.0);
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..100 {
            let scaled = random_scale((0.5, 3.0), base, &mut rng);
            let s = scaled.x / base.x;
            assert!((scaled.y / base.y - s).abs() < 1e-6);
            assert!((scaled.z / base.z - s).abs() < 1e-6);
            assert!(s >= 0.5 && s <= 3.0);
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let ranges = RotationRanges::splat((-90.0, 90.0));
        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        assert_eq!(
            random_rotation(&ranges, &mut rng_a),
            random_rotation(&ranges, &mut rng_b)
        );
    }
}
