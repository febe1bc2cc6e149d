//! Test data generation utilities.
//!
//! Builders for forecast batches with known patterns, shaped like the JSON a
//! weather provider pushes.

use chrono::{DateTime, Duration, FixedOffset};
use forecast_strip::ForecastSample;

const CONDITIONS: &[&str] = &["sunny", "partlycloudy", "cloudy", "rainy"];

/// Parse an RFC 3339 timestamp used as a fixture anchor
pub fn at(timestamp: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(timestamp).expect("valid fixture timestamp")
}

/// `hours` hourly samples starting at `start`, warming by one degree per hour
/// from `base_temp`, cycling through a few conditions.
pub fn hourly_series(start: DateTime<FixedOffset>, hours: usize, base_temp: f64) -> Vec<ForecastSample> {
    (0..hours)
        .map(|i| {
            let datetime = start + Duration::hours(i as i64);
            ForecastSample::new(datetime.to_rfc3339(), CONDITIONS[i % CONDITIONS.len()])
                .with_temperatures(Some(base_temp + i as f64), None)
                .with_precipitation(Some(0.1 * i as f64), Some((i * 5) as f64))
        })
        .collect()
}

/// One sample per day starting at `start`; `temps` holds (high, low) pairs
pub fn daily_series(start: DateTime<FixedOffset>, temps: &[(f64, f64)]) -> Vec<ForecastSample> {
    temps
        .iter()
        .enumerate()
        .map(|(i, (high, low))| {
            let datetime = start + Duration::days(i as i64);
            ForecastSample::new(datetime.to_rfc3339(), CONDITIONS[i % CONDITIONS.len()])
                .with_temperatures(Some(*high), Some(*low))
        })
        .collect()
}

/// A provider payload as JSON text
pub fn provider_payload() -> &'static str {
    r#"[
        {"datetime": "2024-01-15T06:00:00+01:00", "temperature": -3.0, "templow": -8.0, "condition": "snowy", "precipitation": 2.5, "precipitation_probability": 70},
        {"datetime": "2024-01-15T18:00:00+01:00", "temperature": 1.0, "templow": -4.0, "condition": "cloudy", "precipitation_probability": 20},
        {"datetime": "2024-01-16T06:00:00+01:00", "temperature": 4.0, "templow": -1.0, "condition": "cloudy"},
        {"datetime": "2024-01-17T06:00:00+01:00", "temperature": 7.0, "templow": 2.0, "condition": "rainy", "precipitation": 6.0}
    ]"#
}
