//! estimo-chart - Distribution charts for price estimates
//!
//! Builds renderer-agnostic chart descriptions:
//!
//! - **Price per square meter**: kernel density of bucket midpoints with
//!   dashed markers at mean (red), median (blue), quartiles (green) and
//!   min/max (purple)
//! - **Valuation**: a normal curve over mean ± 3σ, peak scaled to 0.5, with
//!   "price X has likelihood Y%" hover text
//!
//! Also provides the euro formatting (`€2.3k`, `€125k`) and the summary
//! text shown next to each chart.

pub mod axis;
pub mod chart;
pub mod color;
pub mod currency;
pub mod empirical;
pub mod error;
pub mod narrative;
pub mod parametric;

pub use axis::*;
pub use chart::*;
pub use color::*;
pub use currency::*;
pub use empirical::*;
pub use error::*;
pub use narrative::*;
pub use parametric::*;
