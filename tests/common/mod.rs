//! Common test utilities for forecast-strip.
//!
//! This module provides shared utilities for the integration tests.

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod assertions;
pub mod test_data;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    forecast_strip::init_tracing("debug").expect("install test subscriber");
});

/// Install the tracing subscriber once per test binary
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
