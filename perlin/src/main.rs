//! Generates a fractal noise field and logs a summary of it.
//!
//! Usage: `perlin [CONFIG]`, where `CONFIG` defaults to `perlin.json5`.

mod config;

use std::{env, path::PathBuf, time::Instant};

use perlin_core::field::{self, FieldSpec};
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_CONFIG_PATH, PerlinConfig};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = PerlinConfig::load(&path)?;
    let FieldSpec {
        width,
        height,
        depth,
        scale,
        octaves,
    } = config.field;

    log::info!(
        "Generating {width}x{height}x{depth} field (scale {scale}, {} octaves, persistence {}, frequency multiplier {})",
        octaves.octaves,
        octaves.persistence,
        octaves.frequency_multiplier
    );

    let start = Instant::now();
    let noise_field = if config.parallel {
        field::generate_parallel(&config.field)?
    } else {
        field::generate(&config.field)?
    };
    log::info!(
        "Generated {} samples in {:?}",
        noise_field.len(),
        start.elapsed()
    );

    if let Some(stats) = noise_field.stats() {
        log::info!(
            "min {:.6}, max {:.6}, mean {:.6}",
            stats.min,
            stats.max,
            stats.mean
        );
    }

    Ok(())
}
