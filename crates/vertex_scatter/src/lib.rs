#![forbid(unsafe_code)]
//! vertex_scatter: instance scattering across mesh vertices.
//!
//! Modules:
//! - sampling: density-based candidate subset selection
//! - scatter: config, normal-aligned frames, jitter, source allocation, composition, run driver, events
//! - host: narrow collaborator traits for scene-query and scene-mutation bindings
//!
//! The engine is pure: it consumes placement points (position, raw normal
//! samples, parent world matrix) and produces `(source id, transform)` pairs.
//! Creating the actual instances in a host scene is the caller's job.
pub mod error;
pub mod host;
pub mod sampling;
pub mod scatter;

/// Convenient re-exports for common types. Import with `use vertex_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::host::{scatter_into, InstanceSink, PointProvider};
    pub use crate::sampling::sample_by_density;
    pub use crate::scatter::allocate::{allocate, validate_sources};
    pub use crate::scatter::compose::compose;
    pub use crate::scatter::config::{RotationRanges, ScatterConfig};
    pub use crate::scatter::events::{
        AsEventSink, EventSink, FnSink, MultiSink, ScatterEvent, ScatterEventKind, VecSink,
    };
    pub use crate::scatter::frame::{average_normal, build_frame};
    pub use crate::scatter::jitter::{random_rotation, random_scale};
    pub use crate::scatter::runner::{
        run_scatter, run_scatter_with_events, RunResult, ScatterEngine,
    };
    pub use crate::scatter::{InstancePlacement, PlacementPoint, SourceId, SourceSpec};
}
