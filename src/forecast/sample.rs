//! Raw forecast samples and timestamp parsing.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ForecastStripError, Result};

/// One forecast entry as delivered by the weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Timestamp as sent by the provider, usually ISO 8601
    pub datetime: String,
    /// High temperature
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Low temperature
    #[serde(default)]
    pub templow: Option<f64>,
    /// Condition code, e.g. `sunny` or `rainy`
    pub condition: String,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub precipitation_probability: Option<f64>,
}

impl ForecastSample {
    pub fn new(datetime: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            datetime: datetime.into(),
            temperature: None,
            templow: None,
            condition: condition.into(),
            precipitation: None,
            precipitation_probability: None,
        }
    }

    pub fn with_temperatures(mut self, high: Option<f64>, low: Option<f64>) -> Self {
        self.temperature = high;
        self.templow = low;
        self
    }

    pub fn with_precipitation(mut self, amount: Option<f64>, probability: Option<f64>) -> Self {
        self.precipitation = amount;
        self.precipitation_probability = probability;
        self
    }

    /// Parse this sample's timestamp, see [`parse_timestamp`]
    pub fn timestamp(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.datetime)
    }
}

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a forecast timestamp.
///
/// RFC 3339 is tried first. Failing that, RFC 2822 and a few common
/// date-time layouts are accepted; layouts without an offset (including a
/// bare `YYYY-MM-DD`) are read as UTC. The wall-clock fields of the
/// returned value are the ones written in the input.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }

    debug!(value = trimmed, "Timestamp is not RFC 3339, trying fallback formats");

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Some(naive) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc().fixed_offset());
    }

    Err(ForecastStripError::TimestampParse {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-03-10T14:00:00+01:00").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour()), (3, 10, 14));
        assert_eq!(dt.offset().local_minus_utc(), 3600);

        let utc = parse_timestamp("2024-03-10T14:00:00Z").unwrap();
        assert_eq!(utc.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_fallbacks() {
        let rfc2822 = parse_timestamp("Sun, 10 Mar 2024 14:00:00 +0000").unwrap();
        assert_eq!(rfc2822.hour(), 14);

        let spaced = parse_timestamp("2024-03-10 14:30:00+02:00").unwrap();
        assert_eq!((spaced.hour(), spaced.minute()), (14, 30));

        let naive = parse_timestamp("2024-03-10T14:00:00").unwrap();
        assert_eq!(naive.offset().local_minus_utc(), 0);
        assert_eq!(naive.hour(), 14);

        let date_only = parse_timestamp("2024-03-10").unwrap();
        assert_eq!((date_only.day(), date_only.hour()), (10, 0));
    }

    #[test]
    fn test_parse_error_names_value() {
        let err = parse_timestamp("tomorrow-ish").unwrap_err();
        match &err {
            ForecastStripError::TimestampParse { value } => assert_eq!(value, "tomorrow-ish"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("tomorrow-ish"));
    }

    #[test]
    fn test_sample_deserializes_with_missing_fields() {
        let sample: ForecastSample =
            serde_json::from_str(r#"{"datetime": "2024-03-10T00:00:00Z", "condition": "sunny"}"#)
                .unwrap();
        assert_eq!(sample.temperature, None);
        assert_eq!(sample.precipitation_probability, None);
        assert!(sample.timestamp().is_ok());
    }
}
