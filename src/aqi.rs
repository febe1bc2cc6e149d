//! Air quality index bands.

use serde::{Deserialize, Serialize};

/// US-EPA style AQI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiBand {
    pub fn from_index(aqi: i64) -> Self {
        match aqi {
            i64::MIN..=50 => AqiBand::Good,
            51..=100 => AqiBand::Moderate,
            101..=150 => AqiBand::UnhealthyForSensitive,
            151..=200 => AqiBand::Unhealthy,
            201..=300 => AqiBand::VeryUnhealthy,
            _ => AqiBand::Hazardous,
        }
    }

    /// CSS colour name for the band
    pub fn color_name(self) -> &'static str {
        match self {
            AqiBand::Good => "green",
            AqiBand::Moderate => "yellowgreen",
            AqiBand::UnhealthyForSensitive => "orange",
            AqiBand::Unhealthy => "red",
            AqiBand::VeryUnhealthy => "purple",
            AqiBand::Hazardous => "maroon",
        }
    }
}
