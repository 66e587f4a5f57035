//! Error types for chart construction

use thiserror::Error;

/// Errors raised while building a chart
#[derive(Error, Debug)]
pub enum ChartError {
    /// Nothing to draw
    #[error("Cannot draw a distribution of an empty sample")]
    EmptySample,

    /// Distribution parameter outside its domain
    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// JSON serialization failed
    #[error("Chart serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
