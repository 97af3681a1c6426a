//! Configuration for a scatter run.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-axis rotation jitter bounds in degrees.
///
/// Ranges may be asymmetric; a min does not have to mirror its max. A
/// zero-width range disables jitter on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationRanges {
    pub x: (f32, f32),
    pub y: (f32, f32),
    pub z: (f32, f32),
}

impl RotationRanges {
    pub fn new(x: (f32, f32), y: (f32, f32), z: (f32, f32)) -> Self {
        Self { x, y, z }
    }

    /// Same range on all three axes.
    pub fn splat(range: (f32, f32)) -> Self {
        Self {
            x: range,
            y: range,
            z: range,
        }
    }
}

/// Configuration for running a scatter.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScatterConfig {
    /// Fraction of candidate points actually used for placement, in (0, 1].
    pub density: f32,
    /// Rotation jitter bounds in degrees.
    pub rotation_ranges: RotationRanges,
    /// Uniform scale jitter bounds; a single scalar drawn from this range
    /// multiplies the source's base scale on all axes.
    pub scale_range: (f32, f32),
    /// Orient each instance to the averaged surface normal at its point.
    pub align_to_normal: bool,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            rotation_ranges: RotationRanges::default(),
            scale_range: (1.0, 1.0),
            align_to_normal: true,
        }
    }
}

impl ScatterConfig {
    /// Creates a new [`ScatterConfig`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement density fraction.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Sets the rotation jitter bounds.
    pub fn with_rotation_ranges(mut self, ranges: RotationRanges) -> Self {
        self.rotation_ranges = ranges;
        self
    }

    /// Sets the scale jitter bounds.
    pub fn with_scale_range(mut self, scale_range: (f32, f32)) -> Self {
        self.scale_range = scale_range;
        self
    }

    /// Sets whether instances align to the surface normal.
    pub fn with_align_to_normal(mut self, align_to_normal: bool) -> Self {
        self.align_to_normal = align_to_normal;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.density > 0.0) {
            return Err(Error::InvalidInput("density must be > 0".into()));
        }
        for (axis, (min, max)) in [
            ("x", self.rotation_ranges.x),
            ("y", self.rotation_ranges.y),
            ("z", self.rotation_ranges.z),
        ] {
            if min > max {
                return Err(Error::InvalidInput(format!(
                    "rotation range {axis} has min {min} > max {max}"
                )));
            }
        }
        let (smin, smax) = self.scale_range;
        if smin < 0.0 || smax < 0.0 {
            return Err(Error::InvalidInput("scale range bounds must be >= 0".into()));
        }
        if smin > smax {
            return Err(Error::InvalidInput(format!(
                "scale range has min {smin} > max {smax}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ScatterConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_density() {
        assert!(ScatterConfig::new().with_density(0.0).validate().is_err());
        assert!(ScatterConfig::new().with_density(-0.5).validate().is_err());
        assert!(ScatterConfig::new()
            .with_density(f32::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn rejects_inverted_ranges() {
        let config = ScatterConfig::new()
            .with_rotation_ranges(RotationRanges::new((10.0, -10.0), (0.0, 0.0), (0.0, 0.0)));
        assert!(config.validate().is_err());

        let config = ScatterConfig::new().with_scale_range((2.0, 0.5));
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_scale_bounds() {
        let config = ScatterConfig::new().with_scale_range((-0.1, 1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn asymmetric_rotation_ranges_are_allowed() {
        let config = ScatterConfig::new().with_rotation_ranges(RotationRanges::new(
            (-5.0, 45.0),
            (0.0, 360.0),
            (-180.0, 0.0),
        ));
        assert!(config.validate().is_ok());
    }
}
