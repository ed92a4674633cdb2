//! Diamond-square heightfield synthesis on a toroidal grid.
//!
//! The generator builds a square `(size+1) x (size+1)` field where `size`
//! is the smallest power of two covering the requested dimensions, refines
//! it through `log2(size)` depth levels of diamond and square passes, then
//! crops the requested rectangle out of the top-left corner.
//!
//! Edge midpoints whose averaging diamond reaches past the grid wrap to
//! the opposite side, and after every square pass the far row/column are
//! pinned to the near ones at the current sample stride. Together these
//! make the full square field seamlessly tileable.

use tracing::trace;

use crate::error::TerrainError;
use crate::heightfield::Heightfield;
use crate::rng::{DisplacementRng, SeededRng};

// ---------------------------------------------------------------------------
// TerrainGenerator
// ---------------------------------------------------------------------------

/// Midpoint-displacement terrain generator.
///
/// Holds its random source so repeated calls advance one deterministic
/// stream; generation itself keeps no state between calls and recomputes
/// the whole field every time.
pub struct TerrainGenerator<R = SeededRng> {
    rng: R,
}

impl TerrainGenerator<SeededRng> {
    /// ChaCha8-backed generator with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SeededRng::from_seed_u64(seed),
        }
    }
}

impl Default for TerrainGenerator<SeededRng> {
    fn default() -> Self {
        Self {
            rng: SeededRng::default(),
        }
    }
}

impl<R: DisplacementRng> TerrainGenerator<R> {
    /// Generator backed by an explicit random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `height x width` field of elevation samples.
    ///
    /// `smoothness` controls how fast random displacement decays with
    /// recursion depth: offsets at depth `d` scale by
    /// `2^(-smoothness * d)`. Any finite value is accepted; negative
    /// values amplify fine detail instead of damping it.
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        smoothness: f64,
    ) -> Result<Heightfield, TerrainError> {
        if width == 0 || height == 0 {
            return Err(TerrainError::InvalidDimensions { width, height });
        }
        let size = smallest_power_of_two_at_least(width.max(height));
        let square = generate_square(&mut self.rng, size, smoothness);
        Ok(square.crop(width, height))
    }
}

// ---------------------------------------------------------------------------
// Size selection
// ---------------------------------------------------------------------------

/// Smallest power of two `p` with `p >= n`; returns 1 for `n <= 1`.
pub fn smallest_power_of_two_at_least(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

// ---------------------------------------------------------------------------
// Square-grid synthesis
// ---------------------------------------------------------------------------

/// Build the full `(size+1) x (size+1)` toroidal square field.
///
/// `size` must be a power of two; `generate` always constructs one, so a
/// violation here is a bug in this crate, not a recoverable error.
pub(crate) fn generate_square<R: DisplacementRng>(
    rng: &mut R,
    size: usize,
    smoothness: f64,
) -> Heightfield {
    assert!(
        size.is_power_of_two(),
        "terrain size must be a power of two, got {size}"
    );

    // Corners are never written by either pass, so they stay at the
    // initial 0.0 for the lifetime of the field.
    let mut field = Heightfield::new(size + 1, size + 1);
    let depths = size.trailing_zeros();
    for depth in 1..=depths {
        trace!(depth, span = size >> (depth - 1), "midpoint displacement pass");
        diamond_pass(&mut field, depth, smoothness, rng);
        square_pass(&mut field, depth, smoothness, rng);
    }
    field
}

/// Diamond pass: for every `span`-edge sub-square, place the center sample
/// as the average of its four corners plus a random offset.
fn diamond_pass<R: DisplacementRng>(
    field: &mut Heightfield,
    depth: u32,
    smoothness: f64,
    rng: &mut R,
) {
    let size = field.width() - 1;
    let span = size >> (depth - 1);
    let half = span / 2;

    for y in (0..size).step_by(span) {
        for x in (0..size).step_by(span) {
            let avg = (field.get(x, y)
                + field.get(x + span, y)
                + field.get(x, y + span)
                + field.get(x + span, y + span))
                / 4.0;
            field.set(x + half, y + half, avg + displacement(rng, smoothness, depth));
        }
    }
}

/// Square pass: for every sub-square, place its four edge midpoints (left,
/// top, right, bottom), each averaged over the diamond of four points
/// around it: two sub-square corners and two diamond centers placed this
/// depth. Diamond centers past the grid edge wrap to the opposite side.
///
/// Interior midpoints are shared between adjacent sub-squares and get
/// displaced once from each; the inputs are corners and diamond centers
/// only, so the second write just replaces the first draw with a fresh
/// one and the result stays well defined.
fn square_pass<R: DisplacementRng>(
    field: &mut Heightfield,
    depth: u32,
    smoothness: f64,
    rng: &mut R,
) {
    let size = field.width() - 1;
    let span = size >> (depth - 1);
    let half = span / 2;

    for y in (0..size).step_by(span) {
        for x in (0..size).step_by(span) {
            let center = (x + half, y + half);
            // Diamond centers of the four neighboring sub-squares.
            let left_center = (wrap(x as isize - half as isize, size), y + half);
            let above_center = (x + half, wrap(y as isize - half as isize, size));
            let right_center = (wrap((x + 3 * half) as isize, size), y + half);
            let below_center = (x + half, wrap((y + 3 * half) as isize, size));

            displace_midpoint(
                field,
                depth,
                smoothness,
                rng,
                [(x, y), center, (x, y + span), left_center],
                (x, y + half),
            );
            displace_midpoint(
                field,
                depth,
                smoothness,
                rng,
                [(x, y), above_center, (x + span, y), center],
                (x + half, y),
            );
            displace_midpoint(
                field,
                depth,
                smoothness,
                rng,
                [(x + span, y), right_center, (x + span, y + span), center],
                (x + span, y + half),
            );
            displace_midpoint(
                field,
                depth,
                smoothness,
                rng,
                [(x, y + span), center, (x + span, y + span), below_center],
                (x + half, y + span),
            );
        }
    }

    // Pin the far row and column to the near ones at this pass's sample
    // stride, keeping the wrap exact at sampled points rather than only
    // approximate through the averaging.
    for y in (0..size).step_by(span) {
        let v = field.get(0, y);
        field.set(size, y, v);
    }
    for x in (0..size).step_by(span) {
        let v = field.get(x, 0);
        field.set(x, size, v);
    }
}

/// Average the four source samples and write that plus a random offset at
/// `target`.
fn displace_midpoint<R: DisplacementRng>(
    field: &mut Heightfield,
    depth: u32,
    smoothness: f64,
    rng: &mut R,
    sources: [(usize, usize); 4],
    target: (usize, usize),
) {
    let sum: f64 = sources.iter().map(|&(x, y)| field.get(x, y)).sum();
    let offset = displacement(rng, smoothness, depth);
    field.set(target.0, target.1, sum / 4.0 + offset);
}

/// Random offset for one placed point: uniform sign times uniform
/// magnitude in `[0, 1)`, scaled by `2^(-smoothness * depth)`.
fn displacement<R: DisplacementRng>(rng: &mut R, smoothness: f64, depth: u32) -> f64 {
    let sign = rng.next_sign();
    let scale = (2.0_f64).powf(-smoothness * f64::from(depth));
    sign * rng.next_unit() * scale
}

/// Wrap a sample coordinate onto the `[0, size)` torus.
#[inline]
fn wrap(coord: isize, size: usize) -> usize {
    coord.rem_euclid(size as isize) as usize
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
