//! Error types for forecast-strip.
//!
//! The numeric pipeline is total over well-typed input, so the only
//! data-driven failure is an unparseable forecast timestamp. The remaining
//! variants cover configuration loading and feed selection.

use thiserror::Error;

/// The main error type for forecast-strip operations.
#[derive(Error, Debug)]
pub enum ForecastStripError {
    /// A forecast sample carried a timestamp no supported format accepts
    #[error("Unparseable forecast timestamp: {value:?}")]
    TimestampParse { value: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The weather entity cannot deliver the requested forecast kind
    #[error("Unsupported forecast for {entity}: {message}")]
    UnsupportedForecast { entity: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ForecastStripError
pub type Result<T> = std::result::Result<T, ForecastStripError>;
