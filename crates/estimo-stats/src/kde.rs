//! One-dimensional Gaussian kernel density estimation
//!
//! The bandwidth follows Scott's rule: `h = s · n^(-1/5)` with `s` the
//! sample standard deviation. Samples without spread (a single value, or
//! all values equal) fall back to a bandwidth of 1% of the value's
//! magnitude, never below [`MIN_FALLBACK_BANDWIDTH`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::quantile::sorted_finite;

/// Smallest bandwidth used for samples without spread
pub const MIN_FALLBACK_BANDWIDTH: f64 = 1.0;

/// Gaussian kernel density estimate over a sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianKde {
    /// Sorted finite sample
    sample: Vec<f64>,
    /// Kernel standard deviation
    bandwidth: f64,
}

impl GaussianKde {
    /// Build an estimate with Scott's bandwidth, `None` for an empty sample
    pub fn new(data: &[f64]) -> Option<Self> {
        let sample = sorted_finite(data);
        if sample.is_empty() {
            return None;
        }
        let bandwidth = match scott_bandwidth(&sample) {
            Some(h) => h,
            None => {
                let center = sample[sample.len() / 2];
                let h = (center.abs() * 0.01).max(MIN_FALLBACK_BANDWIDTH);
                tracing::debug!("Sample has no spread, using fallback bandwidth {}", h);
                h
            }
        };
        Some(Self { sample, bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn min(&self) -> f64 {
        self.sample[0]
    }

    pub fn max(&self) -> f64 {
        self.sample[self.sample.len() - 1]
    }

    /// Density at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.sample.len() as f64;
        let norm = 1.0 / (n * self.bandwidth * (2.0 * PI).sqrt());
        let sum: f64 = self
            .sample
            .iter()
            .map(|xi| {
                let z = (x - xi) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }

    /// Evaluation grid of `points` positions starting at the sample minimum
    /// and stepping `(max - min) / points`.
    ///
    /// A sample without spread gets a grid of ±3 bandwidths around its value.
    pub fn grid(&self, points: usize) -> Vec<f64> {
        let (start, width) = if self.max() > self.min() {
            (self.min(), self.max() - self.min())
        } else {
            (self.min() - 3.0 * self.bandwidth, 6.0 * self.bandwidth)
        };
        let step = width / points as f64;
        (0..points).map(|i| start + i as f64 * step).collect()
    }

    /// `(x, density)` pairs over [`GaussianKde::grid`]
    pub fn curve(&self, points: usize) -> Vec<(f64, f64)> {
        self.grid(points)
            .into_iter()
            .map(|x| (x, self.evaluate(x)))
            .collect()
    }
}

/// Scott's rule bandwidth, `None` when the sample has no spread
pub fn scott_bandwidth(sample: &[f64]) -> Option<f64> {
    let n = sample.len();
    if n < 2 {
        return None;
    }
    let mean = sample.iter().sum::<f64>() / n as f64;
    let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();
    if std_dev > 0.0 && std_dev.is_finite() {
        Some(std_dev * (n as f64).powf(-0.2))
    } else {
        None
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}
