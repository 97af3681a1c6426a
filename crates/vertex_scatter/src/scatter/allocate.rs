//! Distribution of sampled points across candidate source objects.
//!
//! With one source every point goes to it untouched. With several, points are
//! shuffled and cut into contiguous runs sized by each source's proportion;
//! rounding remainder accumulates onto the last source so the partition is
//! always exact.
use rand::RngCore;
use tracing::warn;

use crate::error::{Error, Result};
use crate::sampling::fisher_yates_shuffle;
use crate::scatter::{PlacementPoint, SourceSpec};

/// Tolerance on the proportion sum for multi-source configurations.
pub const PROPORTION_SUM_TOLERANCE: f32 = 0.01;

/// Check a source list before a run.
///
/// Requires a non-empty list with each proportion in [0, 1]. The sum must be
/// 1.0 within [`PROPORTION_SUM_TOLERANCE`], except for a single source whose
/// proportion is irrelevant.
pub fn validate_sources(sources: &[SourceSpec]) -> Result<()> {
    if sources.is_empty() {
        return Err(Error::InvalidInput("at least one source is required".into()));
    }
    for source in sources {
        if !(0.0..=1.0).contains(&source.proportion) {
            return Err(Error::InvalidInput(format!(
                "source '{}' has proportion {} outside [0, 1]",
                source.id, source.proportion
            )));
        }
    }
    if sources.len() > 1 {
        let sum: f32 = sources.iter().map(|s| s.proportion).sum();
        if (sum - 1.0).abs() > PROPORTION_SUM_TOLERANCE {
            return Err(Error::InvalidInput(format!(
                "source proportions sum to {sum}, expected 1.0"
            )));
        }
    }

    Ok(())
}

/// Assign each point a source index.
///
/// Single source: identity mapping, input order preserved, the RNG is not
/// consumed. Multiple sources: the points are shuffled, then source `i` of
/// `n` receives `floor(proportion_i * total)` points for `i < n - 1` and the
/// last source takes the remainder. Run lengths always sum to the input
/// length.
pub fn allocate<R: RngCore>(
    points: Vec<PlacementPoint>,
    sources: &[SourceSpec],
    rng: &mut R,
) -> Vec<(usize, PlacementPoint)> {
    debug_assert!(!sources.is_empty(), "sources must be validated before allocation");

    if sources.len() == 1 {
        return points.into_iter().map(|p| (0, p)).collect();
    }

    let total = points.len();
    let mut shuffled = points;
    fisher_yates_shuffle(&mut shuffled, rng);

    let mut run_lengths = Vec::with_capacity(sources.len());
    let mut assigned = 0usize;
    for source in &sources[..sources.len() - 1] {
        let run = ((source.proportion * total as f32).floor() as usize).min(total - assigned);
        run_lengths.push(run);
        assigned += run;
    }
    run_lengths.push(total - assigned);

    if run_lengths.iter().any(|&len| len == 0) {
        warn!("Some sources receive no placements at {total} points.");
    }

    let mut out = Vec::with_capacity(total);
    let mut iter = shuffled.into_iter();
    for (source_index, run) in run_lengths.into_iter().enumerate() {
        for _ in 0..run {
            // Run lengths sum to the point count, so the iterator cannot run dry.
            if let Some(point) = iter.next() {
                out.push((source_index, point));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn points(count: usize) -> Vec<PlacementPoint> {
        (0..count)
            .map(|i| {
                PlacementPoint::new(
                    Vec3::new(i as f32, 0.0, 0.0),
                    vec![Vec3::new(0.0, 1.0, 0.0)],
                )
            })
            .collect()
    }

    fn run_lengths(allocated: &[(usize, PlacementPoint)], sources: usize) -> Vec<usize> {
        let mut lengths = vec![0usize; sources];
        for (index, _) in allocated {
            lengths[*index] += 1;
        }
        lengths
    }

    #[test]
    fn single_source_maps_everything_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let sources = vec![SourceSpec::new("only", 1.0)];
        let allocated = allocate(points(5), &sources, &mut rng);
        assert_eq!(allocated.len(), 5);
        for (i, (source_index, point)) in allocated.iter().enumerate() {
            assert_eq!(*source_index, 0);
            assert_eq!(point.position.x, i as f32);
        }
    }

    #[test]
    fn proportions_partition_exactly() {
        let mut rng = StdRng::seed_from_u64(2);
        let sources = vec![
            SourceSpec::new("a", 0.3),
            SourceSpec::new("b", 0.3),
            SourceSpec::new("c", 0.4),
        ];
        let allocated = allocate(points(100), &sources, &mut rng);
        assert_eq!(run_lengths(&allocated, 3), vec![30, 30, 40]);
    }

    #[test]
    fn last_source_absorbs_rounding_remainder() {
        let mut rng = StdRng::seed_from_u64(3);
        let sources = vec![
            SourceSpec::new("a", 0.33),
            SourceSpec::new("b", 0.33),
            SourceSpec::new("c", 0.34),
        ];
        let allocated = allocate(points(10), &sources, &mut rng);
        assert_eq!(run_lengths(&allocated, 3), vec![3, 3, 4]);
    }

    #[test]
    fn zero_proportion_source_receives_nothing() {
        let mut rng = StdRng::seed_from_u64(4);
        let sources = vec![SourceSpec::new("a", 0.0), SourceSpec::new("b", 1.0)];
        let allocated = allocate(points(8), &sources, &mut rng);
        assert_eq!(run_lengths(&allocated, 2), vec![0, 8]);
    }

    #[test]
    fn determinism_for_same_seed() {
        let sources = vec![SourceSpec::new("a", 0.5), SourceSpec::new("b", 0.5)];

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let pa: Vec<(usize, f32)> = allocate(points(16), &sources, &mut rng_a)
            .into_iter()
            .map(|(i, p)| (i, p.position.x))
            .collect();
        let pb: Vec<(usize, f32)> = allocate(points(16), &sources, &mut rng_b)
            .into_iter()
            .map(|(i, p)| (i, p.position.x))
            .collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn validate_rejects_empty_and_out_of_range() {
        assert!(validate_sources(&[]).is_err());
        assert!(validate_sources(&[SourceSpec::new("a", 1.5)]).is_err());
        assert!(validate_sources(&[
            SourceSpec::new("a", 0.5),
            SourceSpec::new("b", 0.2),
        ])
        .is_err());
    }

    #[test]
    fn validate_tolerates_near_unit_sums_and_single_source() {
        assert!(validate_sources(&[
            SourceSpec::new("a", 0.333),
            SourceSpec::new("b", 0.333),
            SourceSpec::new("c", 0.333),
        ])
        .is_ok());
        // Single-source proportion is irrelevant.
        assert!(validate_sources(&[SourceSpec::new("a", 0.0)]).is_ok());
    }
}
