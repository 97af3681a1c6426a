//! Scattering pipeline for placing object instances across mesh vertices.
use glam::{Mat4, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod allocate;
pub mod compose;
pub mod config;
pub mod events;
pub mod frame;
pub mod jitter;
pub mod runner;

/// Length below which an averaged or transformed normal is considered zero.
pub const NORMAL_EPSILON: f32 = 1e-8;

pub type SourceId = String;

/// One candidate location for an instance, typically a mesh vertex.
///
/// `normal_samples` holds the raw per-vertex-face normals reported by the
/// host at this vertex; the frame builder averages them. `parent_world` is
/// the world matrix of the transform the normals are local to.
#[derive(Debug, Clone)]
pub struct PlacementPoint {
    pub position: Vec3,
    pub normal_samples: Vec<Vec3>,
    pub parent_world: Mat4,
}

impl PlacementPoint {
    pub fn new(position: Vec3, normal_samples: Vec<Vec3>) -> Self {
        Self {
            position,
            normal_samples,
            parent_world: Mat4::IDENTITY,
        }
    }

    /// Build a point from the flat `[x0, y0, z0, x1, y1, z1, ..]` layout that
    /// host vertex queries commonly return.
    ///
    /// The slice length must be a non-zero multiple of 3.
    pub fn from_flat_normals(position: Vec3, flat: &[f32]) -> Result<Self> {
        if flat.is_empty() || flat.len() % 3 != 0 {
            return Err(Error::InvalidInput(format!(
                "flat normal buffer length {} is not a non-zero multiple of 3",
                flat.len()
            )));
        }
        let normal_samples = flat
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self::new(position, normal_samples))
    }

    /// Host-boundary constructor taking interop math types.
    pub fn from_mint(
        position: mint::Point3<f32>,
        normal_samples: impl IntoIterator<Item = mint::Vector3<f32>>,
    ) -> Self {
        Self::new(
            position.into(),
            normal_samples.into_iter().map(Vec3::from).collect(),
        )
    }

    /// Set the world matrix of the parent transform the normals are local to.
    pub fn with_parent_world(mut self, parent_world: Mat4) -> Self {
        self.parent_world = parent_world;
        self
    }
}

/// A candidate source object, identified by its id, with the fraction of
/// placements it should receive and its current base scale as read from the
/// host scene.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceSpec {
    pub id: SourceId,
    /// Fraction of total placements assigned to this source, in [0, 1].
    /// Ignored when it is the only source.
    pub proportion: f32,
    /// Scale the source object currently has; jitter multiplies onto it.
    pub base_scale: Vec3,
}

impl SourceSpec {
    pub fn new(id: impl Into<SourceId>, proportion: f32) -> Self {
        Self {
            id: id.into(),
            proportion,
            base_scale: Vec3::ONE,
        }
    }

    pub fn with_base_scale(mut self, base_scale: Vec3) -> Self {
        self.base_scale = base_scale;
        self
    }
}

/// One placed instance: which source object to instance and the world
/// transform to give it. Ownership passes to the caller for actual
/// instancing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InstancePlacement {
    pub source_id: SourceId,
    pub transform: Mat4,
}

impl InstancePlacement {
    pub fn new(source_id: impl Into<SourceId>, transform: Mat4) -> Self {
        Self {
            source_id: source_id.into(),
            transform,
        }
    }
}
