//! Configuration management for forecast-strip.
//!
//! Card options are layered with the following precedence:
//! 1. JSON config file (highest priority)
//! 2. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ForecastStripError, Result};
use crate::forecast::BucketMode;
use crate::gradient::TEMPERATURE_STOPS;
use crate::strip::StripOptions;
use crate::units::TemperatureUnit;

/// Clock format shown next to hourly rows.
///
/// Accepted as `12`/`24` or `"12"`/`"24"`; always written as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeFormat")]
pub enum TimeFormat {
    #[serde(rename = "12")]
    TwelveHour,
    #[serde(rename = "24")]
    TwentyFourHour,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeFormat {
    Number(u64),
    Text(String),
}

impl TryFrom<RawTimeFormat> for TimeFormat {
    type Error = String;

    fn try_from(raw: RawTimeFormat) -> std::result::Result<Self, Self::Error> {
        let hours = match raw {
            RawTimeFormat::Number(n) => n.to_string(),
            RawTimeFormat::Text(s) => s,
        };
        match hours.as_str() {
            "12" => Ok(TimeFormat::TwelveHour),
            "24" => Ok(TimeFormat::TwentyFourHour),
            other => Err(format!("time_format must be 12 or 24, got {other:?}")),
        }
    }
}

/// Complete card configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Weather entity providing the forecast
    #[serde(default)]
    pub entity: String,

    /// Maximum number of forecast rows
    #[serde(default = "default_forecast_rows")]
    pub forecast_rows: usize,

    /// Show hourly instead of daily rows
    #[serde(default)]
    pub hourly_forecast: bool,

    #[serde(default)]
    pub time_format: Option<TimeFormat>,

    #[serde(default)]
    pub hide_today_section: bool,

    #[serde(default)]
    pub hide_forecast_section: bool,

    /// Keep decimals on the current temperature
    #[serde(default)]
    pub show_decimal: bool,

    /// Unit forecast temperatures are reported in
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from a JSON file on top of the defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file_config = Self::from_json(&content)?;

        let mut config = Config::default();
        config.merge(file_config);
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if !other.entity.is_empty() {
            self.entity = other.entity;
        }
        self.forecast_rows = other.forecast_rows;
        self.hourly_forecast = other.hourly_forecast;
        if other.time_format.is_some() {
            self.time_format = other.time_format;
        }
        self.hide_today_section = other.hide_today_section;
        self.hide_forecast_section = other.hide_forecast_section;
        self.show_decimal = other.show_decimal;
        self.temperature_unit = other.temperature_unit;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.entity.is_empty() {
            return Err(ForecastStripError::Config {
                message: "Attribute \"entity\" must be present".to_string(),
            });
        }

        if self.forecast_rows < 1 {
            return Err(ForecastStripError::Config {
                message: "Attribute \"forecast_rows\" must be greater than 0".to_string(),
            });
        }

        if self.hide_today_section && self.hide_forecast_section {
            return Err(ForecastStripError::Config {
                message: "Attributes \"hide_today_section\" and \"hide_forecast_section\" must not be enabled at the same time".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ForecastStripError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }

    /// Strip options matching this configuration, using the default stops
    pub fn strip_options(&self) -> StripOptions<'static> {
        StripOptions {
            mode: BucketMode::from_hourly(self.hourly_forecast),
            max_rows: self.forecast_rows,
            unit: self.temperature_unit.clone(),
            stops: TEMPERATURE_STOPS,
            zone: None,
            show_decimal: self.show_decimal,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entity: String::new(),
            forecast_rows: default_forecast_rows(),
            hourly_forecast: false,
            time_format: None,
            hide_today_section: false,
            hide_forecast_section: false,
            show_decimal: false,
            temperature_unit: TemperatureUnit::default(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions for serde
fn default_forecast_rows() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}
