//! Forecast samples and their aggregation into display rows.

pub mod aggregate;
pub mod sample;

pub use aggregate::{
    aggregate_forecasts, aggregate_forecasts_in_zone, most_frequent, BucketMode, MergedForecastRow,
};
pub use sample::{parse_timestamp, ForecastSample};
