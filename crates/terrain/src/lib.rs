//! Tileable fractal terrain synthesis.
//!
//! Generates pseudo-random heightfields with the diamond-square midpoint
//! displacement algorithm on a toroidal grid, so the output can be tiled
//! seamlessly in both axes. All randomness flows through the
//! [`DisplacementRng`] trait, which makes generation deterministic for a
//! given seed and fully scriptable in tests.

pub mod ascii_map;
pub mod config;
pub mod error;
pub mod generator;
pub mod heightfield;
pub mod rng;

#[cfg(test)]
mod integration_tests;

pub use ascii_map::build_preview;
pub use config::TerrainConfig;
pub use error::TerrainError;
pub use generator::TerrainGenerator;
pub use heightfield::Heightfield;
pub use rng::{DisplacementRng, ScriptedRng, SeededRng};
