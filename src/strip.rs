//! One render pass of the forecast strip.
//!
//! Aggregates the samples, derives the strip-wide temperature span, then
//! places every row's range bar and resolves its slice of the gradient.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;

use crate::error::Result;
use crate::forecast::{aggregate_forecasts_in_zone, BucketMode, ForecastSample, MergedForecastRow};
use crate::gradient::{gradient_range, resolve_range, ColorStop, Rgb, TEMPERATURE_STOPS};
use crate::logging::{in_render_pass, log_aggregation_stats, log_rejected_batch};
use crate::range_bar::{current_indicator, map_range_to_percent, BarRange, CurrentIndicator};
use crate::units::{round_half_up, to_celsius, TemperatureUnit};

/// Inputs that stay fixed between render passes
#[derive(Debug, Clone)]
pub struct StripOptions<'a> {
    pub mode: BucketMode,
    pub max_rows: usize,
    /// Unit the samples and the current temperature are expressed in
    pub unit: TemperatureUnit,
    /// Colour stops in °C
    pub stops: &'a [ColorStop],
    /// Offset rows are bucketed in and `now` is compared in; `None` uses
    /// the offset `now` carries
    pub zone: Option<FixedOffset>,
    /// Keep the current temperature's decimals instead of rounding it
    pub show_decimal: bool,
}

impl Default for StripOptions<'static> {
    fn default() -> Self {
        Self {
            mode: BucketMode::Daily,
            max_rows: 5,
            unit: TemperatureUnit::Celsius,
            stops: TEMPERATURE_STOPS,
            zone: None,
            show_decimal: false,
        }
    }
}

/// A display row with its bar geometry and colours
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripRow {
    pub row: MergedForecastRow,
    /// Rounded low, widened by the current temperature on the current row
    pub low: f64,
    /// Rounded high, widened by the current temperature on the current row
    pub high: f64,
    pub is_now: bool,
    pub bar: BarRange,
    pub gradient: Vec<Rgb>,
    /// Present on the current row when a current temperature is known
    pub indicator: Option<CurrentIndicator>,
}

/// The whole strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastStrip {
    pub min_temp: f64,
    pub max_temp: f64,
    /// Stops selected for `min_temp..=max_temp`
    pub gradient: Vec<Rgb>,
    pub rows: Vec<StripRow>,
}

fn is_current_bucket(mode: BucketMode, row: &DateTime<FixedOffset>, now: &DateTime<FixedOffset>) -> bool {
    let row = row.with_timezone(now.offset());
    match mode {
        BucketMode::Daily => now.date_naive() == row.date_naive(),
        BucketMode::Hourly => now.date_naive() == row.date_naive() && now.hour() == row.hour(),
    }
}

fn display_span(rows: &[MergedForecastRow], current_temp: Option<f64>) -> Option<(f64, f64)> {
    let lows = rows.iter().map(|r| r.templow).chain(current_temp);
    let highs = rows.iter().map(|r| r.temperature).chain(current_temp);

    let min = lows.reduce(f64::min)?;
    let max = highs.reduce(f64::max)?;
    Some((round_half_up(min), round_half_up(max)))
}

fn build_row(
    row: MergedForecastRow,
    colors: &[Rgb],
    (min_temp, max_temp): (f64, f64),
    current_temp: Option<f64>,
    is_now: bool,
) -> StripRow {
    let current = current_temp.filter(|_| is_now);
    let low = round_half_up(current.map_or(row.templow, |c| c.min(row.templow)));
    let high = round_half_up(current.map_or(row.temperature, |c| c.max(row.temperature)));

    let bar = map_range_to_percent(min_temp, max_temp, low, high);
    let gradient = resolve_range(colors, bar.start_percent, bar.end_percent);
    let indicator = current.map(|c| current_indicator(low, high, c));

    StripRow {
        row,
        low,
        high,
        is_now,
        bar,
        gradient,
        indicator,
    }
}

/// Build the strip for one batch of samples.
///
/// `current_temp` is expressed in `options.unit` like the samples and is
/// rounded the same way the rows are unless `options.show_decimal` is set.
/// It widens the strip's span and the row that contains `now`. Rows are
/// bucketed in `options.zone`, falling back to the offset of `now`.
pub fn build_strip(
    samples: &[ForecastSample],
    options: &StripOptions<'_>,
    current_temp: Option<f64>,
    now: DateTime<FixedOffset>,
) -> Result<ForecastStrip> {
    in_render_pass("build_strip", || -> Result<ForecastStrip> {
        let current_temp = if options.show_decimal {
            current_temp
        } else {
            current_temp.map(round_half_up)
        };
        let zone = options.zone.unwrap_or(*now.offset());
        let now = now.with_timezone(&zone);

        let rows = aggregate_forecasts_in_zone(
            samples,
            options.mode,
            options.max_rows,
            current_temp,
            Some(zone),
        )
        .map_err(|e| {
            log_rejected_batch(&e, samples.len());
            e
        })?;

        let Some((min_temp, max_temp)) = display_span(&rows, current_temp) else {
            return Ok(ForecastStrip {
                min_temp: 0.0,
                max_temp: 0.0,
                gradient: vec![Rgb::WHITE],
                rows: Vec::new(),
            });
        };

        let gradient = gradient_range(
            options.stops,
            to_celsius(&options.unit, min_temp),
            to_celsius(&options.unit, max_temp),
        );

        let rows: Vec<StripRow> = rows
            .into_iter()
            .map(|row| {
                let is_now = is_current_bucket(options.mode, &row.datetime, &now);
                build_row(row, &gradient, (min_temp, max_temp), current_temp, is_now)
            })
            .collect();

        log_aggregation_stats(
            options.mode,
            samples.len(),
            rows.len(),
            min_temp,
            max_temp,
            gradient.len(),
        );

        Ok(ForecastStrip {
            min_temp,
            max_temp,
            gradient,
            rows,
        })
    })
}
