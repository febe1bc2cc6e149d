//! RGB colour type and channel interpolation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::round_half_up;

/// An 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// CSS functional notation, e.g. `rgb(164, 195, 210)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Value `percent`% of the way from `start` towards `end`, rounded half-up
pub fn value_at_position(start: u8, end: u8, percent: f64) -> u8 {
    let (start, end) = (start as f64, end as f64);
    let value = (start - end).abs() / 100.0 * percent;
    let v = if start > end {
        round_half_up(start - value)
    } else {
        round_half_up(start + value)
    };
    v.clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two colours, `percent` in 0..=100
pub fn lerp_color(c1: Rgb, c2: Rgb, percent: f64) -> Rgb {
    Rgb {
        r: value_at_position(c1.r, c2.r, percent),
        g: value_at_position(c1.g, c2.g, percent),
        b: value_at_position(c1.b, c2.b, percent),
    }
}
