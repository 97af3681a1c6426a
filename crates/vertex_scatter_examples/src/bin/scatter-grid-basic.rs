use glam::Mat4;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_scatter::prelude::*;
use vertex_scatter_examples::{bumpy_grid, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Synthetic 32x32 height-field standing in for a host mesh query.
    let points = bumpy_grid(32, Mat4::IDENTITY);

    let sources = vec![SourceSpec::new("rock", 1.0)];
    let config = ScatterConfig::default()
        .with_density(0.4)
        .with_rotation_ranges(RotationRanges::new((0.0, 0.0), (0.0, 360.0), (0.0, 0.0)))
        .with_scale_range((0.7, 1.3));

    let mut rng = StdRng::seed_from_u64(2025);
    let result = run_scatter(&points, &sources, &config, &mut rng)?;

    println!(
        "placed {} instances from {} sampled points ({} skipped)",
        result.placements.len(),
        result.points_sampled,
        result.points_skipped
    );
    for placement in result.placements.iter().take(5) {
        let pos = placement.transform.w_axis.truncate();
        let up = placement.transform.y_axis.truncate().normalize();
        println!(
            "  {} at ({:.2}, {:.2}, {:.2}) up ({:.2}, {:.2}, {:.2})",
            placement.source_id, pos.x, pos.y, pos.z, up.x, up.y, up.z
        );
    }

    Ok(())
}
