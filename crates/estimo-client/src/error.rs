//! Caller-facing error type for the estimate pipelines

use estimo_chart::{ChartError, INSUFFICIENT_SAMPLE_MESSAGE};
use estimo_query::QueryError;
use estimo_stats::StatsError;
use thiserror::Error;

/// Which of the four outcomes a failed submission ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Transport,
    ResponseShape,
    InsufficientSample,
}

/// Errors raised by a pipeline submission
#[derive(Error, Debug)]
pub enum EstimateError {
    /// Filters rejected before any network call
    #[error("{0}")]
    Validation(#[from] QueryError),

    /// Connection failure or non-2xx status
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Body does not match the expected shape
    #[error("Unexpected response shape: {message}")]
    ResponseShape { message: String },

    /// Too few transactions behind the buckets
    #[error("Insufficient sample: {sample_size} transactions")]
    InsufficientSample { sample_size: u64 },
}

impl EstimateError {
    pub fn transport(message: impl Into<String>) -> Self {
        EstimateError::Transport {
            message: message.into(),
        }
    }

    pub fn response_shape(message: impl Into<String>) -> Self {
        EstimateError::ResponseShape {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EstimateError::Validation(_) => ErrorKind::Validation,
            EstimateError::Transport { .. } => ErrorKind::Transport,
            EstimateError::ResponseShape { .. } => ErrorKind::ResponseShape,
            EstimateError::InsufficientSample { .. } => ErrorKind::InsufficientSample,
        }
    }

    /// The single message shown to the user in place of a result
    pub fn user_message(&self) -> String {
        match self {
            EstimateError::Validation(err) => err.to_string(),
            EstimateError::Transport { message } => format!("API call failed: {}", message),
            EstimateError::ResponseShape { message } => {
                format!("The estimation service returned an unexpected response: {}", message)
            }
            EstimateError::InsufficientSample { .. } => INSUFFICIENT_SAMPLE_MESSAGE.to_string(),
        }
    }
}

impl From<StatsError> for EstimateError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::InsufficientSample { sample_size } => {
                EstimateError::InsufficientSample { sample_size }
            }
            other => EstimateError::response_shape(other.to_string()),
        }
    }
}

impl From<ChartError> for EstimateError {
    fn from(err: ChartError) -> Self {
        EstimateError::response_shape(err.to_string())
    }
}

/// Result type alias for pipeline operations
pub type EstimateResult<T> = Result<T, EstimateError>;
