use serde::{Deserialize, Serialize};

/// Seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Default roughness-decay exponent. Values near 0 keep large-scale
/// bumpiness across depth levels; values near 1 flatten fine detail fast.
pub const DEFAULT_SMOOTHNESS: f64 = 0.6;

pub const DEFAULT_FIELD_WIDTH: usize = 128;
pub const DEFAULT_FIELD_HEIGHT: usize = 128;

/// Widest ASCII preview the demo binary prints.
pub const DEFAULT_PREVIEW_COLS: usize = 96;

/// Parameters for one terrain generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Seed for deterministic generation.
    pub seed: u64,
    /// Roughness-decay exponent fed to the displacement model.
    pub smoothness: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            smoothness: DEFAULT_SMOOTHNESS,
        }
    }
}
