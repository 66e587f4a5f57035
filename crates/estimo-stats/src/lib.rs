//! estimo-stats - Statistics behind the price estimates
//!
//! Two kinds of input reach this crate:
//!
//! - **Buckets**: per-bucket min/max prices and transaction counts. Each
//!   bucket's midpoint stands in for one observation, and descriptive
//!   statistics (mean, median, quartiles, min, max) are computed over them.
//! - **Parametric summaries**: a (mean, standard deviation, sample size)
//!   triple already aggregated by the service, accepted verbatim.
//!
//! # Sample size rule
//!
//! Bucket statistics are only computed when the buckets hold more than
//! [`INSUFFICIENT_SAMPLE_MAX`] transactions in total. Smaller samples yield
//! [`StatsError::InsufficientSample`] and no statistic at all.

pub mod empirical;
pub mod error;
pub mod kde;
pub mod parametric;
pub mod quantile;
pub mod summary;

pub use empirical::*;
pub use error::*;
pub use kde::*;
pub use parametric::*;
pub use quantile::*;
pub use summary::*;
