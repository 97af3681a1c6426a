//! Final transform composition for one instance.
use glam::{EulerRot, Mat4, Vec3};

/// Combine a base frame with jitter into the instance's world transform.
///
/// The jitter rotation (XYZ Euler, degrees) multiplies on the right of the
/// frame, so it spins the instance in its own local axes rather than around
/// the world axes. Scale applies last and already incorporates the source's
/// base scale.
pub fn compose(frame: Mat4, rotation_deg: Vec3, scale: Vec3) -> Mat4 {
    let jitter = Mat4::from_euler(
        EulerRot::XYZ,
        rotation_deg.x.to_radians(),
        rotation_deg.y.to_radians(),
        rotation_deg.z.to_radians(),
    );
    frame * jitter * Mat4::from_scale(scale)
}
