//! Collaborator seams for host-application bindings.
//!
//! The engine itself never touches a scene. A binding implements
//! [`PointProvider`] over the host's vertex queries and [`InstanceSink`] over
//! its instancing commands; [`scatter_into`] wires the two through one run.
use glam::Vec3;
use rand::RngCore;

use crate::error::Result;
use crate::scatter::config::ScatterConfig;
use crate::scatter::runner::{run_scatter, RunResult};
use crate::scatter::{InstancePlacement, PlacementPoint, SourceSpec};

/// Scene-query side: enumerates candidate points and reads source scales.
pub trait PointProvider {
    /// Placement points of the current target, one per candidate vertex.
    fn placement_points(&self) -> Result<Vec<PlacementPoint>>;

    /// Current scale of a source object, used as the jitter base scale.
    fn base_scale(&self, _source_id: &str) -> Vec3 {
        Vec3::ONE
    }
}

/// Scene-mutation side: consumes finished placements.
pub trait InstanceSink {
    fn place_instances(&mut self, placements: &[InstancePlacement]) -> Result<()>;
}

/// Run one scatter from `provider` into `sink`.
///
/// Each source's base scale is refreshed from the provider before the run,
/// so specs built from stale UI state still pick up the scene's current
/// scales.
pub fn scatter_into<R: RngCore>(
    provider: &impl PointProvider,
    sink: &mut impl InstanceSink,
    sources: &[SourceSpec],
    config: &ScatterConfig,
    rng: &mut R,
) -> Result<RunResult> {
    let points = provider.placement_points()?;
    let sources: Vec<SourceSpec> = sources
        .iter()
        .map(|s| s.clone().with_base_scale(provider.base_scale(&s.id)))
        .collect();

    let result = run_scatter(&points, &sources, config, rng)?;
    sink.place_instances(&result.placements)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct GridProvider {
        side: usize,
    }

    impl PointProvider for GridProvider {
        fn placement_points(&self) -> Result<Vec<PlacementPoint>> {
            let mut points = Vec::with_capacity(self.side * self.side);
            for x in 0..self.side {
                for z in 0..self.side {
                    points.push(PlacementPoint::new(
                        Vec3::new(x as f32, 0.0, z as f32),
                        vec![Vec3::new(0.0, 1.0, 0.0)],
                    ));
                }
            }
            Ok(points)
        }

        fn base_scale(&self, source_id: &str) -> Vec3 {
            if source_id == "bush" {
                Vec3::splat(3.0)
            } else {
                Vec3::ONE
            }
        }
    }

    #[derive(Default)]
    struct CollectingSink {
        placed: Vec<InstancePlacement>,
    }

    impl InstanceSink for CollectingSink {
        fn place_instances(&mut self, placements: &[InstancePlacement]) -> Result<()> {
            self.placed.extend_from_slice(placements);
            Ok(())
        }
    }

    #[test]
    fn provider_to_sink_round_trip() {
        let provider = GridProvider { side: 4 };
        let mut sink = CollectingSink::default();
        let sources = vec![SourceSpec::new("bush", 1.0)];
        let mut rng = StdRng::seed_from_u64(21);

        let result = scatter_into(
            &provider,
            &mut sink,
            &sources,
            &ScatterConfig::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(result.placements.len(), 16);
        assert_eq!(sink.placed.len(), 16);
        // Provider scale overrides the source's configured base scale.
        let s = sink.placed[0].transform.x_axis.truncate().length();
        assert!((s - 3.0).abs() < 1e-5);
    }

    #[test]
    fn provider_errors_propagate() {
        struct FailingProvider;
        impl PointProvider for FailingProvider {
            fn placement_points(&self) -> Result<Vec<PlacementPoint>> {
                Err(crate::error::Error::Other("scene query failed".into()))
            }
        }

        let mut sink = CollectingSink::default();
        let sources = vec![SourceSpec::new("rock", 1.0)];
        let mut rng = StdRng::seed_from_u64(22);
        assert!(scatter_into(
            &FailingProvider,
            &mut sink,
            &sources,
            &ScatterConfig::default(),
            &mut rng,
        )
        .is_err());
        assert!(sink.placed.is_empty());
    }
}
