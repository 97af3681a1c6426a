//! Normal averaging and orthonormal frame construction.
//!
//! A placement point carries the raw per-vertex-face normals the host reports
//! at a vertex. [`average_normal`] reduces them to one direction and
//! [`build_frame`] turns that direction into a rotation+translation matrix
//! that orients an instance to the surface.
use glam::{Mat4, Vec3};

use crate::error::{Error, Result};
use crate::scatter::{PlacementPoint, NORMAL_EPSILON};

/// Arithmetic per-axis mean of the raw samples.
///
/// Samples are averaged component-wise as-is, not normalized or
/// length-weighted first. Matches the naive averaging the placements were
/// authored against; changing it would reorient existing scatters.
pub fn average_normal(samples: &[Vec3]) -> Result<Vec3> {
    if samples.is_empty() {
        return Err(Error::InvalidInput(
            "cannot average an empty normal sample list".into(),
        ));
    }
    let sum: Vec3 = samples.iter().copied().sum();
    Ok(sum / samples.len() as f32)
}

/// Build the local-to-world frame for a placement point.
///
/// The averaged normal is rotated into world space through the upper 3x3 of
/// the parent matrix, then becomes the Y axis of an orthonormal basis. The
/// parent's Y axis disambiguates the tangent plane; when the normal is
/// parallel to it the parent's X axis is used instead. Axis order in the
/// output is `{tangent2, normal, tangent1}`, a compatibility convention.
///
/// Returns [`Error::DegenerateNormal`] when the averaged normal is (near)
/// zero, collapses under the parent transform, or no tangent can be built.
pub fn build_frame(point: &PlacementPoint) -> Result<Mat4> {
    let averaged = average_normal(&point.normal_samples)?;
    let local_normal = normalize_checked(averaged, "averaged normal is zero-length")?;

    // Direction, not position: translation must not apply.
    let world_normal = normalize_checked(
        point.parent_world.transform_vector3(local_normal),
        "normal collapses under the parent transform",
    )?;

    let reference = point.parent_world.y_axis.truncate();
    let cross = world_normal.cross(reference);
    let tangent1 = if cross.length() < NORMAL_EPSILON {
        // Normal parallel to the parent Y axis; fall back to the X axis.
        normalize_checked(
            world_normal.cross(point.parent_world.x_axis.truncate()),
            "no tangent axis; parent basis is degenerate",
        )?
    } else {
        cross / cross.length()
    };
    let tangent2 = normalize_checked(
        world_normal.cross(tangent1),
        "no bitangent axis; parent basis is degenerate",
    )?;

    Ok(Mat4::from_cols(
        tangent2.extend(0.0),
        world_normal.extend(0.0),
        tangent1.extend(0.0),
        point.position.extend(1.0),
    ))
}

fn normalize_checked(v: Vec3, context: &str) -> Result<Vec3> {
    let length = v.length();
    if length < NORMAL_EPSILON {
        return Err(Error::DegenerateNormal(context.to_owned()));
    }
    Ok(v / length)
}
