//! ASCII preview rendering for heightfields.
//!
//! Previews are built on demand from a `&Heightfield` — no state, no I/O.
//! Wide fields are downsampled by block averaging so the output fits a
//! terminal, and elevations are normalized to the field's own range before
//! mapping onto the character ramp.

use crate::heightfield::Heightfield;

/// Elevation ramp from lowest to highest.
const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Map a normalized elevation in `[0, 1]` to a ramp character.
///
/// Out-of-range values are clamped.
pub fn elevation_char(normalized: f64) -> char {
    let clamped = normalized.clamp(0.0, 1.0);
    let idx = (clamped * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx]
}

/// Build a preview at most `max_cols` characters wide (plus row labels).
///
/// Each character covers a square block of samples, averaged together. A
/// flat field renders entirely with the lowest ramp character.
pub fn build_preview(field: &Heightfield, max_cols: usize) -> String {
    let block = field.width().div_ceil(max_cols.max(1)).max(1);
    let cols = field.width().div_ceil(block);
    let rows = field.height().div_ceil(block);

    let (min, max) = field.min_max();
    let range = max - min;

    let mut lines: Vec<String> = Vec::with_capacity(rows + 2);
    for row in 0..rows {
        // Row label every 4 preview rows, in field coordinates.
        let label = if row % 4 == 0 {
            format!("{:>4} | ", row * block)
        } else {
            "     | ".to_string()
        };

        let mut line = label;
        for col in 0..cols {
            let avg = block_average(field, col * block, row * block, block);
            let normalized = if range > 0.0 { (avg - min) / range } else { 0.0 };
            line.push(elevation_char(normalized));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!(
        "Legend: '{}'=lowest .. '{}'=highest (height range {min:.3} .. {max:.3})",
        RAMP[0],
        RAMP[RAMP.len() - 1]
    ));

    lines.join("\n")
}

/// Average the samples of a `block x block` region starting at `(gx, gy)`,
/// clipped to the field bounds.
fn block_average(field: &Heightfield, gx: usize, gy: usize, block: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for dy in 0..block {
        for dx in 0..block {
            let x = gx + dx;
            let y = gy + dy;
            if field.in_bounds(x, y) {
                sum += field.get(x, y);
                count += 1;
            }
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_char_extremes() {
        assert_eq!(elevation_char(0.0), ' ');
        assert_eq!(elevation_char(1.0), '@');
        assert_eq!(elevation_char(-0.5), ' ');
        assert_eq!(elevation_char(2.0), '@');
    }

    #[test]
    fn test_elevation_char_midpoint() {
        // 0.5 * 9 = 4.5 rounds to index 5.
        assert_eq!(elevation_char(0.5), '+');
    }

    #[test]
    fn test_flat_field_renders_lowest() {
        let field = Heightfield::new(8, 8);
        let preview = build_preview(&field, 8);
        let body: Vec<&str> = preview
            .lines()
            .filter(|l| l.contains('|'))
            .collect();
        assert_eq!(body.len(), 8);
        for line in body {
            let (_, cells) = line.split_once('|').unwrap();
            assert!(cells[1..].chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn test_preview_downsamples_to_max_cols() {
        let field = Heightfield::new(100, 100);
        let preview = build_preview(&field, 25);
        let first = preview.lines().next().unwrap();
        let (_, cells) = first.split_once('|').unwrap();
        // 100 wide at block 4 gives exactly 25 columns (plus the leading
        // space after the separator).
        assert_eq!(cells.len() - 1, 25);
    }

    #[test]
    fn test_extremes_map_to_ramp_ends() {
        let mut field = Heightfield::new(2, 1);
        field.set(0, 0, -3.0);
        field.set(1, 0, 5.0);
        let preview = build_preview(&field, 2);
        let first = preview.lines().next().unwrap();
        let (_, cells) = first.split_once('|').unwrap();
        assert_eq!(cells.trim_start(), "@");
        assert!(cells[1..].starts_with(' '));
    }

    #[test]
    fn test_legend_reports_range() {
        let mut field = Heightfield::new(2, 2);
        field.set(1, 1, 2.0);
        let preview = build_preview(&field, 2);
        assert!(preview.contains("height range 0.000 .. 2.000"));
    }
}
