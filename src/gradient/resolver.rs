//! Resolving colours at arbitrary positions of a selected gradient.
//!
//! The selected colours are spread evenly over 0..=100 %. A query percent is
//! mapped to a fractional stop index; the two bracketing stops are blended
//! per channel.

use super::color::{lerp_color, Rgb};
use super::stops::{gradient_range, ColorStop};
use crate::units::round_half_up;

/// Which of the two bracketing stop indices [`calculate_rgb`] reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickIndex {
    /// The lower index, used for the start of a range
    Left,
    /// The higher index, used for the end of a range
    Right,
}

/// Colour at `percent` along `colors`, plus the bracketing stop index
/// selected by `pick`.
///
/// The nominal stop is the nearest one (half-up). When the position lies
/// before it the signed distance to the next index is negative and the
/// blend runs from the previous stop instead, which keeps the blend
/// percentage inside 0..=100.
///
/// Fewer than two colours resolve to the only colour (or white) at index 0.
pub fn calculate_rgb(colors: &[Rgb], percent: f64, pick: PickIndex) -> (Rgb, usize) {
    if colors.len() < 2 {
        return (colors.first().copied().unwrap_or(Rgb::WHITE), 0);
    }

    let last = colors.len() - 1;
    let percent = percent.clamp(0.0, 100.0);
    let steps = 100.0 / last as f64;
    let start_index = (round_half_up(percent / steps) as usize).min(last);
    let percent_to_next = (100.0 / steps) * (percent - start_index as f64 * steps);

    let end_index = if percent_to_next == 0.0 {
        start_index
    } else if percent_to_next < 0.0 {
        start_index.saturating_sub(1)
    } else {
        (start_index + 1).min(last)
    };

    let (start, end) = (colors[start_index], colors[end_index]);
    let rgb = if percent_to_next < 0.0 {
        lerp_color(end, start, 100.0 + percent_to_next)
    } else {
        lerp_color(start, end, percent_to_next)
    };

    let index = match pick {
        PickIndex::Left => start_index.min(end_index),
        PickIndex::Right => start_index.max(end_index),
    };
    (rgb, index)
}

/// Colours describing the part of `colors` between `from_percent` and
/// `to_percent`: the interpolated endpoints with every whole stop strictly
/// between them.
///
/// Zero or one colour yields a flat gradient of that colour (white if
/// none), repeated so the result always has two entries.
pub fn resolve_range(colors: &[Rgb], from_percent: f64, to_percent: f64) -> Vec<Rgb> {
    if colors.len() <= 1 {
        let rgb = colors.first().copied().unwrap_or(Rgb::WHITE);
        return vec![rgb, rgb];
    }

    let (from_rgb, from_index) = calculate_rgb(colors, from_percent, PickIndex::Left);
    let (to_rgb, to_index) = calculate_rgb(colors, to_percent, PickIndex::Right);

    let mut resolved = Vec::with_capacity(colors.len());
    resolved.push(from_rgb);
    if from_index + 1 < to_index {
        resolved.extend_from_slice(&colors[from_index + 1..to_index]);
    }
    resolved.push(to_rgb);
    resolved
}

/// Select the stops of `table` covering `[min_temp, max_temp]` and resolve
/// the colours between `from_percent` and `to_percent` of that selection.
///
/// Temperatures must already be in the table's unit (°C). Never fails.
pub fn resolve_gradient(
    table: &[ColorStop],
    min_temp: f64,
    max_temp: f64,
    from_percent: f64,
    to_percent: f64,
) -> Vec<Rgb> {
    let colors = gradient_range(table, min_temp, max_temp);
    resolve_range(&colors, from_percent, to_percent)
}
