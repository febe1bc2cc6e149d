//! Merging forecast samples into one row per day or hour.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

use super::sample::ForecastSample;
use crate::error::Result;

/// How samples are grouped into rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketMode {
    Daily,
    Hourly,
}

impl BucketMode {
    pub fn from_hourly(hourly: bool) -> Self {
        if hourly {
            BucketMode::Hourly
        } else {
            BucketMode::Daily
        }
    }
}

/// Bucket identity derived from a timestamp's wall clock in the bucketing zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BucketKey {
    Day(NaiveDate),
    Hour { month: u32, day: u32, hour: u32 },
}

impl BucketKey {
    fn of(mode: BucketMode, dt: &DateTime<FixedOffset>) -> Self {
        match mode {
            BucketMode::Daily => BucketKey::Day(dt.date_naive()),
            BucketMode::Hourly => BucketKey::Hour {
                month: dt.month(),
                day: dt.day(),
                hour: dt.hour(),
            },
        }
    }
}

/// One aggregated display row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedForecastRow {
    /// Timestamp of the first sample in the bucket
    pub datetime: DateTime<FixedOffset>,
    /// Highest temperature in the bucket
    pub temperature: f64,
    /// Lowest temperature in the bucket
    pub templow: f64,
    /// Most frequent condition, first seen wins ties
    pub condition: String,
    pub precipitation: f64,
    pub precipitation_probability: f64,
}

/// The most frequent item, ties going to the one encountered first
pub fn most_frequent<'a, I>(items: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (item, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((item, count));
        }
    }
    best.map(|(item, _)| item)
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn merge_bucket(
    bucket: &[(DateTime<FixedOffset>, &ForecastSample)],
    fallback_current_temp: Option<f64>,
) -> Option<MergedForecastRow> {
    let (datetime, _) = bucket.first()?;
    let fallback = fallback_current_temp.unwrap_or(0.0);
    let condition = most_frequent(bucket.iter().map(|(_, s)| s.condition.as_str()))?;

    Some(MergedForecastRow {
        datetime: *datetime,
        temperature: max_of(
            bucket
                .iter()
                .map(|(_, s)| s.temperature.or(s.templow).unwrap_or(fallback)),
        ),
        templow: bucket
            .iter()
            .map(|(_, s)| s.templow.or(s.temperature).unwrap_or(fallback))
            .fold(f64::INFINITY, f64::min),
        condition: condition.to_string(),
        precipitation: max_of(bucket.iter().map(|(_, s)| s.precipitation.unwrap_or(0.0))),
        precipitation_probability: max_of(
            bucket
                .iter()
                .map(|(_, s)| s.precipitation_probability.unwrap_or(0.0)),
        ),
    })
}

/// Group `samples` by day or hour and reduce each group to one row.
///
/// Rows come back ascending by timestamp and truncated to `max_rows`.
/// Samples missing a high fall back to their low, then to
/// `fallback_current_temp`, then to zero (lows mirror this).
///
/// Buckets are read in the offset of the first sample; see
/// [`aggregate_forecasts_in_zone`] to choose it.
///
/// Fails on the first timestamp that cannot be parsed.
pub fn aggregate_forecasts(
    samples: &[ForecastSample],
    mode: BucketMode,
    max_rows: usize,
    fallback_current_temp: Option<f64>,
) -> Result<Vec<MergedForecastRow>> {
    aggregate_forecasts_in_zone(samples, mode, max_rows, fallback_current_temp, None)
}

/// [`aggregate_forecasts`] with every timestamp moved into `zone` before it
/// is bucketed, so one instant always lands in one bucket whatever offset it
/// was written with. Row timestamps are reported in `zone` as well.
///
/// `None` uses the offset of the first sample.
pub fn aggregate_forecasts_in_zone(
    samples: &[ForecastSample],
    mode: BucketMode,
    max_rows: usize,
    fallback_current_temp: Option<f64>,
    zone: Option<FixedOffset>,
) -> Result<Vec<MergedForecastRow>> {
    let timestamps = samples
        .iter()
        .map(ForecastSample::timestamp)
        .collect::<Result<Vec<_>>>()?;
    let Some(zone) = zone.or_else(|| timestamps.first().map(|t| *t.offset())) else {
        return Ok(Vec::new());
    };

    let mut order: Vec<BucketKey> = Vec::new();
    let mut buckets: HashMap<BucketKey, Vec<(DateTime<FixedOffset>, &ForecastSample)>> =
        HashMap::new();

    for (sample, timestamp) in samples.iter().zip(timestamps) {
        let timestamp = timestamp.with_timezone(&zone);
        let key = BucketKey::of(mode, &timestamp);
        trace!(datetime = %sample.datetime, ?key, "Bucketing forecast sample");

        buckets
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push((timestamp, sample));
    }

    let mut rows: Vec<MergedForecastRow> = order
        .iter()
        .filter_map(|key| buckets.get(key))
        .filter(|bucket| !bucket.is_empty())
        .filter_map(|bucket| merge_bucket(bucket, fallback_current_temp))
        .collect();

    rows.sort_by_key(|row| row.datetime);
    rows.truncate(max_rows);

    debug!(
        samples = samples.len(),
        buckets = order.len(),
        rows = rows.len(),
        mode = ?mode,
        %zone,
        "Aggregated forecast samples"
    );

    Ok(rows)
}
