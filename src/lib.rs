//! # forecast-strip
//!
//! The numeric core of a weather forecast card.
//!
//! This library turns raw forecast samples into what a forecast strip
//! draws: one merged row per day or hour, a range bar per row positioned
//! inside the strip's overall temperature span, and the slice of a
//! temperature colour gradient that bar covers.
//!
//! ## Architecture
//!
//! - **Forecast**: parses sample timestamps and merges samples per bucket
//! - **Gradient**: selects colour stops for a span and interpolates colours
//! - **Range bar**: maps a row's low/high to percentages of the span
//! - **Strip**: runs the above for one render pass
//!
//! Everything is synchronous and free of shared state.

pub mod aqi;
pub mod config;
pub mod error;
pub mod feed;
pub mod forecast;
pub mod gradient;
pub mod logging;
pub mod range_bar;
pub mod strip;
pub mod units;

pub use config::Config;
pub use error::{ForecastStripError, Result};
pub use feed::{determine_forecast_type, ForecastType, WeatherFeatures};
pub use forecast::{
    aggregate_forecasts, aggregate_forecasts_in_zone, BucketMode, ForecastSample, MergedForecastRow,
};
pub use gradient::{resolve_gradient, ColorStop, Rgb, TEMPERATURE_STOPS};
pub use logging::{in_render_pass, init_tracing, log_rejected_batch};
pub use range_bar::{map_range_to_percent, BarRange};
pub use strip::{build_strip, ForecastStrip, StripOptions, StripRow};
pub use units::{convert_temperature, TemperatureUnit};
