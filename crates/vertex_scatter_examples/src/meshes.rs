//! Synthetic vertex sets standing in for host scene queries.
use glam::{Mat4, Vec3};
use vertex_scatter::prelude::PlacementPoint;

/// A `side` x `side` height-field grid with analytic surface normals.
///
/// Each vertex carries two raw normal samples slightly tilted against each
/// other, mimicking the per-vertex-face normals a host mesh query returns.
pub fn bumpy_grid(side: usize, parent_world: Mat4) -> Vec<PlacementPoint> {
    let mut points = Vec::with_capacity(side * side);
    for ix in 0..side {
        for iz in 0..side {
            let x = ix as f32;
            let z = iz as f32;
            let y = (x * 0.4).sin() * (z * 0.4).cos();

            // Analytic height-field normal: (-dy/dx, 1, -dy/dz).
            let dydx = 0.4 * (x * 0.4).cos() * (z * 0.4).cos();
            let dydz = -0.4 * (x * 0.4).sin() * (z * 0.4).sin();
            let normal = Vec3::new(-dydx, 1.0, -dydz);
            let tilt = Vec3::new(0.05, 0.0, -0.05);

            points.push(
                PlacementPoint::new(
                    Vec3::new(x, y, z),
                    vec![normal + tilt, normal - tilt],
                )
                .with_parent_world(parent_world),
            );
        }
    }
    points
}

/// Points on a unit sphere scaled by `radius`, normals pointing outward.
pub fn sphere_points(count: usize, radius: f32) -> Vec<PlacementPoint> {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
            let r = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f32;
            let dir = Vec3::new(r * theta.cos(), y, r * theta.sin());
            PlacementPoint::new(dir * radius, vec![dir])
        })
        .collect()
}
