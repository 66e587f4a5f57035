use thiserror::Error;

/// Errors raised while summarizing estimation responses
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Too few transactions to report anything
    #[error("Only {sample_size} transactions match; more than 4 are needed")]
    InsufficientSample { sample_size: u64 },

    /// Parallel bucket arrays differ in length
    #[error("Bucket arrays differ in length: {min_len} minimums, {max_len} maximums, {count_len} counts")]
    LengthMismatch {
        min_len: usize,
        max_len: usize,
        count_len: usize,
    },

    /// Transaction counts sum past `u64::MAX`
    #[error("Transaction counts overflow")]
    CountOverflow,

    /// NaN or infinite price
    #[error("Non-finite value at bucket {index}")]
    NonFinite { index: usize },

    /// A parameter outside its domain (e.g. a negative standard deviation)
    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
