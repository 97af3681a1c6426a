//! High-level driver turning candidate points into instance placements.
use glam::Mat4;
use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sampling::sample_by_density;
use crate::scatter::allocate::{allocate, validate_sources};
use crate::scatter::compose::compose;
use crate::scatter::config::ScatterConfig;
use crate::scatter::events::{EventSink, ScatterEvent, ScatterEventKind};
use crate::scatter::frame::build_frame;
use crate::scatter::jitter::{random_rotation, random_scale};
use crate::scatter::{InstancePlacement, PlacementPoint, SourceSpec};

/// Result of running a scatter.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Placements produced by the run, in allocation order.
    pub placements: Vec<InstancePlacement>,
    /// Points selected by density sampling.
    pub points_sampled: usize,
    /// Sampled points dropped for degenerate normals.
    pub points_skipped: usize,
}

impl RunResult {
    /// Creates a new empty [`RunResult`].
    pub fn new() -> Self {
        Self::default()
    }
}

/// Engine wrapper owning a validated configuration.
pub struct ScatterEngine {
    /// Scatter configuration applied by this engine.
    pub config: ScatterConfig,
}

impl ScatterEngine {
    pub fn try_new(config: ScatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: ScatterConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "config must be valid");
        Self { config }
    }

    /// Runs a scatter over `points`, returning the result.
    pub fn run(
        &self,
        points: &[PlacementPoint],
        sources: &[SourceSpec],
        rng: &mut impl RngCore,
    ) -> Result<RunResult> {
        run_scatter(points, sources, &self.config, rng)
    }

    pub fn run_with_events(
        &self,
        points: &[PlacementPoint],
        sources: &[SourceSpec],
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<RunResult> {
        run_scatter_with_events(points, sources, &self.config, rng, sink)
    }
}

/// Run a scatter without event observation.
pub fn run_scatter<R: RngCore>(
    points: &[PlacementPoint],
    sources: &[SourceSpec],
    config: &ScatterConfig,
    rng: &mut R,
) -> Result<RunResult> {
    run_scatter_with_events(points, sources, config, rng, &mut ())
}

/// Run a scatter, forwarding progress to `sink`.
///
/// Validation failures surface before any computation. A point whose frame
/// cannot be built (zero averaged normal, degenerate parent basis) is
/// skipped and counted, never fatal; the remaining points still produce
/// placements.
pub fn run_scatter_with_events<R: RngCore>(
    points: &[PlacementPoint],
    sources: &[SourceSpec],
    config: &ScatterConfig,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<RunResult> {
    config.validate()?;
    validate_sources(sources)?;
    if config.align_to_normal {
        if let Some(index) = points.iter().position(|p| p.normal_samples.is_empty()) {
            return Err(Error::InvalidInput(format!(
                "point {index} has no normal samples"
            )));
        }
    }

    if sink.wants(ScatterEventKind::RunStarted) {
        sink.send(ScatterEvent::RunStarted {
            point_count: points.len(),
            source_count: sources.len(),
        });
    }

    let sampled = sample_by_density(points, config.density, rng);
    let points_sampled = sampled.len();
    let allocated = allocate(sampled, sources, rng);

    let mut placements = Vec::with_capacity(allocated.len());
    let mut points_skipped = 0usize;
    for (source_index, point) in allocated {
        let source = &sources[source_index];

        let frame = if config.align_to_normal {
            match build_frame(&point) {
                Ok(frame) => frame,
                Err(Error::DegenerateNormal(reason)) => {
                    warn!(
                        "Skipping point at {:?} for source '{}': {reason}.",
                        point.position, source.id
                    );
                    if sink.wants(ScatterEventKind::PointSkipped) {
                        sink.send(ScatterEvent::PointSkipped {
                            position: point.position,
                            reason,
                        });
                    }
                    points_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            }
        } else {
            Mat4::from_translation(point.position)
        };

        let rotation = random_rotation(&config.rotation_ranges, rng);
        let scale = random_scale(config.scale_range, source.base_scale, rng);
        let placement = InstancePlacement::new(source.id.clone(), compose(frame, rotation, scale));

        if sink.wants(ScatterEventKind::PlacementMade) {
            sink.send(ScatterEvent::PlacementMade {
                placement: placement.clone(),
            });
        }
        placements.push(placement);
    }

    let result = RunResult {
        placements,
        points_sampled,
        points_skipped,
    };
    debug!(
        "Scatter produced {} placements from {} sampled points ({} skipped).",
        result.placements.len(),
        result.points_sampled,
        result.points_skipped
    );
    if sink.wants(ScatterEventKind::RunFinished) {
        sink.send(ScatterEvent::RunFinished {
            result: result.clone(),
        });
    }

    Ok(result)
}
