//! Temperature units and conversion.
//!
//! Units arrive from the host as unit-of-measure tags (`°C`, `°F`). Anything
//! else is kept verbatim as [`TemperatureUnit::Other`]; it never compares
//! equal to a known unit, so converting from it always goes through the
//! Fahrenheit → Celsius branch.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Tag used by hosts for degrees Celsius
pub const CELSIUS_TAG: &str = "°C";
/// Tag used by hosts for degrees Fahrenheit
pub const FAHRENHEIT_TAG: &str = "°F";

/// A temperature unit identified by its unit-of-measure tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    /// Unrecognised tag, preserved as given
    Other(String),
}

impl TemperatureUnit {
    /// Build a unit from its tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            CELSIUS_TAG => TemperatureUnit::Celsius,
            FAHRENHEIT_TAG => TemperatureUnit::Fahrenheit,
            other => TemperatureUnit::Other(other.to_string()),
        }
    }

    /// The unit-of-measure tag
    pub fn tag(&self) -> &str {
        match self {
            TemperatureUnit::Celsius => CELSIUS_TAG,
            TemperatureUnit::Fahrenheit => FAHRENHEIT_TAG,
            TemperatureUnit::Other(tag) => tag,
        }
    }
}

impl Default for TemperatureUnit {
    fn default() -> Self {
        TemperatureUnit::Celsius
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TemperatureUnit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TemperatureUnit::from_tag(s))
    }
}

impl From<String> for TemperatureUnit {
    fn from(tag: String) -> Self {
        TemperatureUnit::from_tag(&tag)
    }
}

impl From<TemperatureUnit> for String {
    fn from(unit: TemperatureUnit) -> Self {
        unit.tag().to_string()
    }
}

/// Round half-way cases towards positive infinity.
///
/// This is the rounding every percentage and colour channel in the crate
/// uses; `f64::round` would round `-2.5` to `-3` instead of `-2`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Express `value` (given in `unit`) in degrees Celsius
pub fn to_celsius(unit: &TemperatureUnit, value: f64) -> f64 {
    if *unit == TemperatureUnit::Celsius {
        value
    } else {
        round_half_up((value - 32.0) * (5.0 / 9.0))
    }
}

/// Express `value` (given in `unit`) in degrees Fahrenheit
pub fn to_fahrenheit(unit: &TemperatureUnit, value: f64) -> f64 {
    if *unit == TemperatureUnit::Fahrenheit {
        value
    } else {
        round_half_up(value * 9.0 / 5.0 + 32.0)
    }
}

/// Convert `value` from `unit` into `target`.
///
/// Same unit is a no-op. A Celsius source is converted to Fahrenheit, any
/// other source is treated as Fahrenheit and converted to Celsius.
pub fn convert_temperature(unit: &TemperatureUnit, target: &TemperatureUnit, value: f64) -> f64 {
    if unit == target {
        return value;
    }

    match unit {
        TemperatureUnit::Celsius => to_fahrenheit(unit, value),
        _ => to_celsius(unit, value),
    }
}
