#![forbid(unsafe_code)]

mod meshes;

pub use meshes::{bumpy_grid, sphere_points};

/// Install a stdout tracing subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
