//! Colour stop table and range selection.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// A colour anchored at a temperature threshold in °C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub threshold: i32,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(threshold: i32, color: Rgb) -> Self {
        Self { threshold, color }
    }
}

/// Default temperature stops, ascending by threshold
pub const TEMPERATURE_STOPS: &[ColorStop] = &[
    ColorStop::new(-20, Rgb::new(0, 60, 98)),     // dark blue
    ColorStop::new(-10, Rgb::new(120, 162, 204)), // darker blue
    ColorStop::new(0, Rgb::new(164, 195, 210)),   // light blue
    ColorStop::new(10, Rgb::new(121, 210, 179)),  // turquoise
    ColorStop::new(20, Rgb::new(252, 245, 112)),  // yellow
    ColorStop::new(30, Rgb::new(255, 150, 79)),   // orange
    ColorStop::new(40, Rgb::new(255, 192, 159)),  // red
];

fn round_down_to(value: f64, multiple: f64) -> f64 {
    (value / multiple).floor() * multiple
}

fn round_up_to(value: f64, multiple: f64) -> f64 {
    (value / multiple).ceil() * multiple
}

/// Colours of the stops covering `[min_celsius, max_celsius]`.
///
/// The span is widened to the enclosing multiples of ten and clipped to the
/// table's own threshold range. Order follows the table. When no stop is
/// selected (the span lies outside the table, or the table is empty) the
/// result is a single white stop, so it is never empty.
pub fn gradient_range(table: &[ColorStop], min_celsius: f64, max_celsius: f64) -> Vec<Rgb> {
    let (Some(lowest), Some(highest)) = (
        table.iter().map(|s| s.threshold).min(),
        table.iter().map(|s| s.threshold).max(),
    ) else {
        return vec![Rgb::WHITE];
    };

    let min_val = round_down_to(min_celsius, 10.0).max(lowest as f64);
    let max_val = round_up_to(max_celsius, 10.0).min(highest as f64);

    let colors: Vec<Rgb> = table
        .iter()
        .filter(|stop| {
            let t = stop.threshold as f64;
            t >= min_val && t <= max_val
        })
        .map(|stop| stop.color)
        .collect();

    if colors.is_empty() {
        vec![Rgb::WHITE]
    } else {
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(thresholds: &[i32]) -> Vec<Rgb> {
        thresholds
            .iter()
            .map(|t| {
                TEMPERATURE_STOPS
                    .iter()
                    .find(|s| s.threshold == *t)
                    .unwrap()
                    .color
            })
            .collect()
    }

    #[test]
    fn test_range_rounds_to_tens() {
        let range = gradient_range(TEMPERATURE_STOPS, 3.0, 17.0);
        assert_eq!(range, colors(&[0, 10, 20]));
    }

    #[test]
    fn test_range_on_exact_boundaries() {
        let range = gradient_range(TEMPERATURE_STOPS, 0.0, 10.0);
        assert_eq!(range, colors(&[0, 10]));
    }

    #[test]
    fn test_range_negative_span() {
        let range = gradient_range(TEMPERATURE_STOPS, -12.0, -1.0);
        assert_eq!(range, colors(&[-20, -10, 0]));
    }

    #[test]
    fn test_range_clipped_to_table() {
        let range = gradient_range(TEMPERATURE_STOPS, -45.0, 55.0);
        assert_eq!(range.len(), TEMPERATURE_STOPS.len());
    }

    #[test]
    fn test_range_outside_table() {
        assert_eq!(gradient_range(TEMPERATURE_STOPS, 60.0, 70.0), vec![Rgb::WHITE]);
        assert_eq!(gradient_range(TEMPERATURE_STOPS, -90.0, -50.0), vec![Rgb::WHITE]);
        assert_eq!(gradient_range(&[], 0.0, 10.0), vec![Rgb::WHITE]);
    }

    #[test]
    fn test_flat_span_selects_single_stop() {
        let range = gradient_range(TEMPERATURE_STOPS, 20.0, 20.0);
        assert_eq!(range, colors(&[20]));
    }
}
