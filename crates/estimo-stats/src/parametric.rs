//! Parametric (mean, standard deviation) summaries
//!
//! The valuation service aggregates on its side; the triple it returns is
//! taken as-is and only checked for domain errors.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Share of prices reported to fall within one standard deviation of the mean.
///
/// Displayed figure; a normal distribution actually puts about 68.3% there.
pub const ONE_SIGMA_COVERAGE_PERCENT: u32 = 70;

/// A (mean, standard deviation, sample size) triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub sample_size: u64,
}

impl ParametricSummary {
    /// Accept a service triple, rejecting a non-finite mean or a
    /// non-positive standard deviation.
    pub fn new(mean: f64, std_dev: f64, sample_size: u64) -> StatsResult<Self> {
        if !mean.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "mean",
                value: mean,
            });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "standard deviation",
                value: std_dev,
            });
        }
        Ok(Self {
            mean,
            std_dev,
            sample_size,
        })
    }

    /// `(mean - k·σ, mean + k·σ)`
    pub fn interval(&self, sigmas: f64) -> (f64, f64) {
        (
            self.mean - sigmas * self.std_dev,
            self.mean + sigmas * self.std_dev,
        )
    }

    /// Normal density at `x`
    pub fn density(&self, x: f64) -> f64 {
        normal_pdf(x, self.mean, self.std_dev)
    }
}

/// Normal probability density function
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}
