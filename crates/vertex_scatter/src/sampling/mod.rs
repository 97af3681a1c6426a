//! Density-based selection of candidate placement points.
//!
//! The scatter pipeline starts from the full vertex set of a target mesh.
//! [`sample_by_density`] keeps a uniformly random subset of it sized by the
//! configured density fraction, leaving the input untouched.
use rand::RngCore;

use crate::scatter::PlacementPoint;

/// Select a random subset of `points` sized by `density`.
///
/// - `density >= 1.0` returns a clone of the input, order preserved.
/// - Otherwise the result holds `floor(len * density)` distinct points drawn
///   without replacement; the result may be empty for small inputs.
///
/// The draw consumes the RNG deterministically, so a seeded generator yields
/// a reproducible subset.
pub fn sample_by_density<R: RngCore>(
    points: &[PlacementPoint],
    density: f32,
    rng: &mut R,
) -> Vec<PlacementPoint> {
    if density >= 1.0 {
        return points.to_vec();
    }
    if density <= 0.0 || points.is_empty() {
        return Vec::new();
    }

    let target = ((points.len() as f32) * density).floor() as usize;
    let target = target.min(points.len());
    if target == 0 {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..points.len()).collect();
    fisher_yates_shuffle(&mut indices, rng);
    indices.truncate(target);

    indices.into_iter().map(|i| points[i].clone()).collect()
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// In-place Fisher–Yates shuffle using the provided RNG.
pub(crate) fn fisher_yates_shuffle<T>(arr: &mut [T], rng: &mut dyn RngCore) {
    let mut n = arr.len();
    while n > 1 {
        // Choose a random index in [0, n)
        let k = (rng.next_u32() as usize) % n;
        n -= 1;
        arr.swap(n, k);
    }
}
