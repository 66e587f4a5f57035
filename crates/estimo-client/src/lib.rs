//! estimo-client - Estimation service client and pipelines
//!
//! Sends compiled filters to the remote estimation service and turns its
//! answer into statistics and a chart:
//!
//! - **Price per square meter**: filters → predicate → bucket arrays →
//!   midpoint statistics → kernel density chart
//! - **Valuation**: filters → predicate → (mean, std dev, sample size) →
//!   normal distribution chart
//!
//! Every failure is an [`EstimateError`] whose [`ErrorKind`] tells the caller
//! which message to show. Requests are never retried and carry no timeout
//! beyond the HTTP client's default.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod pipeline;

pub use config::{ConfigError, EstimoConfig, ServiceConfig};
pub use endpoint::*;
pub use error::*;
pub use http::*;
pub use pipeline::*;
