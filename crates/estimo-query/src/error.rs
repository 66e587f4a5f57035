//! Validation errors raised before any request leaves the process.

use thiserror::Error;

/// Filter validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A postal code token is not exactly five ASCII digits
    #[error("Invalid postal code: {token}")]
    InvalidPostalCode { token: String },

    /// Lower bound above upper bound, or a bound outside the allowed limits
    #[error("Invalid {dimension} range: {lower}..={upper} (allowed {min}..={max})")]
    InvalidRange {
        dimension: &'static str,
        lower: f64,
        upper: f64,
        min: f64,
        max: f64,
    },

    /// A numeric query parameter did not parse
    #[error("Invalid number for '{key}': {value}")]
    InvalidNumber { key: String, value: String },

    /// A list token that does not name a known option
    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    /// The addressed estimation does not accept this ownership type
    #[error("Ownership type '{code}' is not supported by this estimation")]
    UnsupportedOwnership { code: &'static str },
}

/// Result type alias for filter operations
pub type QueryResult<T> = Result<T, QueryError>;
