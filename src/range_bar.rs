//! Range bar geometry.
//!
//! Each forecast row draws its low..high range as a bar inside the strip's
//! global min..max span. Positions are percentages of that span.

use serde::{Deserialize, Serialize};

/// Placement of a row's range inside the global span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRange {
    /// Start of the bar, 0..=100
    pub start_percent: f64,
    /// End of the bar, 0..=100
    pub end_percent: f64,
    /// Fractional offset of the low temperature in the span, used to align
    /// a fixed-width indicator
    pub shift: f64,
}

/// Position of the current temperature inside a row's own bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentIndicator {
    /// Percent along the row's bar
    pub position: f64,
    /// Same position as a fraction, for indicator alignment
    pub shift: f64,
}

/// Map `[low_temp, high_temp]` to percentages of `[min_temp, max_temp]`.
///
/// A degenerate span (`min_temp == max_temp`) covers the whole bar.
pub fn map_range_to_percent(min_temp: f64, max_temp: f64, low_temp: f64, high_temp: f64) -> BarRange {
    if max_temp == min_temp {
        return BarRange {
            start_percent: 0.0,
            end_percent: 100.0,
            shift: 0.0,
        };
    }

    let span = max_temp - min_temp;
    let start_percent = (100.0 / span) * (low_temp - min_temp);
    // (100 / 11) * 11 overshoots 100 by one ulp, hence the clamp
    let end_percent = (100.0 / span) * (high_temp - min_temp);

    BarRange {
        start_percent: start_percent.clamp(0.0, 100.0),
        end_percent: end_percent.clamp(0.0, 100.0),
        shift: (low_temp - min_temp) / span,
    }
}

/// Locate `current_temp` within a row spanning `[low_temp, high_temp]`
pub fn current_indicator(low_temp: f64, high_temp: f64, current_temp: f64) -> CurrentIndicator {
    if low_temp == high_temp {
        return CurrentIndicator {
            position: 0.0,
            shift: 0.0,
        };
    }

    let steps = high_temp - low_temp;
    CurrentIndicator {
        position: (100.0 / steps) * (current_temp - low_temp),
        shift: (current_temp - low_temp) / steps,
    }
}
