use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_scatter::prelude::*;
use vertex_scatter_examples::{init_tracing, sphere_points};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Outward normals on a sphere; instances lean with the surface.
    let points = sphere_points(2000, 25.0);

    let sources = vec![
        SourceSpec::new("tree", 0.2).with_base_scale(Vec3::splat(2.0)),
        SourceSpec::new("bush", 0.3),
        SourceSpec::new("rock", 0.5).with_base_scale(Vec3::new(1.0, 0.6, 1.0)),
    ];
    let config = ScatterConfig::default()
        .with_density(0.6)
        .with_scale_range((0.8, 1.5));

    // Collect per-source counts through the event stream.
    let mut sink = VecSink::new();
    let mut rng = StdRng::seed_from_u64(7);
    let result = run_scatter_with_events(&points, &sources, &config, &mut rng, &mut sink)?;

    for source in &sources {
        let count = result
            .placements
            .iter()
            .filter(|p| p.source_id == source.id)
            .count();
        println!("{}: {} placements", source.id, count);
    }
    println!(
        "{} events observed, {} points skipped",
        sink.len(),
        result.points_skipped
    );

    Ok(())
}
