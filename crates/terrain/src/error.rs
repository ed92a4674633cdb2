// ---------------------------------------------------------------------------
// TerrainError: typed errors for terrain generation requests
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors a terrain generation request can return.
///
/// Internal contract violations (a non-power-of-two square size) are
/// asserted, not returned: the public entry point constructs valid sizes,
/// so hitting one is a bug in this crate, not a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainError {
    /// Requested field dimensions are unusable (zero width or height).
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidDimensions { width, height } => write!(
                f,
                "invalid field dimensions {width}x{height}: width and height must be at least 1"
            ),
        }
    }
}

impl std::error::Error for TerrainError {}
