//! Terrain demo binary.
//!
//! Usage: `terrainlab [width] [height] [smoothness] [seed]`
//!
//! Generates one heightfield and prints an ASCII preview to stdout.
//! Logging is filtered through `RUST_LOG`.

use std::env;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use terrain::config::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_PREVIEW_COLS};
use terrain::{build_preview, TerrainConfig, TerrainGenerator};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn parse_or<T: FromStr>(arg: Option<String>, default: T) -> T {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() {
    init_logging();

    let defaults = TerrainConfig::default();
    let mut args = env::args().skip(1);
    let width = parse_or(args.next(), DEFAULT_FIELD_WIDTH);
    let height = parse_or(args.next(), DEFAULT_FIELD_HEIGHT);
    let smoothness = parse_or(args.next(), defaults.smoothness);
    let seed = parse_or(args.next(), defaults.seed);

    let mut generator = TerrainGenerator::from_seed(seed);
    let started = Instant::now();
    match generator.generate(width, height, smoothness) {
        Ok(field) => {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            let (min, max) = field.min_max();
            tracing::info!(width, height, smoothness, seed, elapsed_ms, "terrain generated");
            println!("{}", build_preview(&field, DEFAULT_PREVIEW_COLS));
            println!("{width}x{height}, smoothness {smoothness}, seed {seed}, heights {min:.3} .. {max:.3}");
        }
        Err(e) => {
            tracing::error!("terrain generation failed: {e}");
            process::exit(1);
        }
    }
}
