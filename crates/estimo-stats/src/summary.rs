//! Summary statistics for a sample
//!
//! Provides the descriptive statistics shown next to a price distribution:
//! - Mean and sample standard deviation
//! - Median and the 25th/75th percentiles (linear interpolation)
//! - Min, max

use serde::{Deserialize, Serialize};

use crate::quantile::{quantile_sorted, sorted_finite};

/// Summary statistics for a numeric sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of finite values summarized
    pub count: usize,
    /// Mean (average)
    pub mean: f64,
    /// Standard deviation with Bessel's correction (0 for a single value)
    pub std_dev: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// 25th percentile
    pub q25: f64,
    /// 75th percentile
    pub q75: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl SummaryStatistics {
    /// Compute summary statistics, `None` when no finite value is present
    pub fn from_data(data: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(data);
        let count = sorted.len();
        if count == 0 {
            return None;
        }

        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            mean,
            std_dev,
            median: quantile_sorted(&sorted, 0.5)?,
            q25: quantile_sorted(&sorted, 0.25)?,
            q75: quantile_sorted(&sorted, 0.75)?,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Get the interquartile range (q75 - q25)
    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }
}
