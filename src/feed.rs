//! Choosing which forecast feed to request from a weather entity.
//!
//! Weather entities advertise the forecasts they can deliver as a bitmask of
//! supported features.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ForecastStripError, Result};
use crate::forecast::BucketMode;

/// Supported-feature bitmask of a weather entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherFeatures(pub u32);

impl WeatherFeatures {
    pub const FORECAST_DAILY: u32 = 1;
    pub const FORECAST_HOURLY: u32 = 2;
    pub const FORECAST_TWICE_DAILY: u32 = 4;

    pub fn supports(self, feature: u32) -> bool {
        self.0 & feature != 0
    }

    pub fn supports_daily(self) -> bool {
        self.supports(Self::FORECAST_DAILY)
    }

    pub fn supports_hourly(self) -> bool {
        self.supports(Self::FORECAST_HOURLY)
    }

    /// Entities without either feed only expose a forecast attribute
    pub fn is_legacy(self) -> bool {
        !self.supports_daily() && !self.supports_hourly()
    }
}

/// Forecast feed to subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastType {
    Daily,
    Hourly,
}

impl From<ForecastType> for BucketMode {
    fn from(kind: ForecastType) -> Self {
        match kind {
            ForecastType::Daily => BucketMode::Daily,
            ForecastType::Hourly => BucketMode::Hourly,
        }
    }
}

/// Pick the feed for `entity` given what it supports and whether hourly
/// rows were requested.
///
/// Requesting hourly rows from an entity without an hourly feed is an
/// error. Requesting daily rows from an entity without a daily feed falls
/// back to hourly and logs a warning.
pub fn determine_forecast_type(
    entity: &str,
    features: WeatherFeatures,
    hourly: bool,
) -> Result<ForecastType> {
    let daily_ok = features.supports_daily();
    let hourly_ok = features.supports_hourly();

    match (hourly, daily_ok, hourly_ok) {
        (true, _, true) => Ok(ForecastType::Hourly),
        (false, true, _) => Ok(ForecastType::Daily),
        (true, _, false) => Err(ForecastStripError::UnsupportedForecast {
            entity: entity.to_string(),
            message: "hourly forecast is not supported".to_string(),
        }),
        (false, false, _) => {
            warn!(
                entity = entity,
                "Weather entity does not support daily forecast, falling back to hourly"
            );
            Ok(ForecastType::Hourly)
        }
    }
}
