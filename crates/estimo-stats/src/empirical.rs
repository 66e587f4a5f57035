//! Statistics over price buckets
//!
//! The price-per-square-meter service answers with parallel arrays: the
//! minimum and maximum price of each bucket and its transaction count. The
//! bucket midpoint `(min + max) / 2` stands in for one observation, and all
//! midpoints weigh the same regardless of their count.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::summary::SummaryStatistics;

/// Largest total transaction count that is still too small to report on
pub const INSUFFICIENT_SAMPLE_MAX: u64 = 4;

/// Midpoints of parallel min/max arrays.
pub fn midpoints(min_prices: &[f64], max_prices: &[f64]) -> StatsResult<Vec<f64>> {
    if min_prices.len() != max_prices.len() {
        return Err(StatsError::LengthMismatch {
            min_len: min_prices.len(),
            max_len: max_prices.len(),
            count_len: min_prices.len(),
        });
    }

    min_prices
        .iter()
        .zip(max_prices)
        .enumerate()
        .map(|(index, (&min, &max))| {
            if min.is_finite() && max.is_finite() {
                Ok((min + max) / 2.0)
            } else {
                Err(StatsError::NonFinite { index })
            }
        })
        .collect()
}

/// Sum of bucket counts, `None` if it does not fit in a `u64`
pub fn total_transactions(transactions: &[u64]) -> Option<u64> {
    transactions.iter().try_fold(0u64, |total, &n| total.checked_add(n))
}

/// Check the sample size rule shared by every entry into the pipeline.
pub fn ensure_sufficient(sample_size: u64) -> StatsResult<()> {
    if sample_size <= INSUFFICIENT_SAMPLE_MAX {
        tracing::info!("Sample of {} transactions is too small to summarize", sample_size);
        return Err(StatsError::InsufficientSample { sample_size });
    }
    Ok(())
}

/// Descriptive statistics of bucket midpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalSummary {
    /// Bucket midpoints, in response order
    pub midpoints: Vec<f64>,
    /// Total transactions behind the buckets
    pub sample_size: u64,
    /// Statistics over the midpoints
    pub stats: SummaryStatistics,
}

impl EmpiricalSummary {
    /// Summarize buckets.
    ///
    /// The three arrays must have equal length. A total count of
    /// [`INSUFFICIENT_SAMPLE_MAX`] or less is reported as
    /// [`StatsError::InsufficientSample`] before anything is computed.
    pub fn from_buckets(
        min_prices: &[f64],
        max_prices: &[f64],
        transactions: &[u64],
    ) -> StatsResult<Self> {
        if min_prices.len() != max_prices.len() || min_prices.len() != transactions.len() {
            return Err(StatsError::LengthMismatch {
                min_len: min_prices.len(),
                max_len: max_prices.len(),
                count_len: transactions.len(),
            });
        }

        let sample_size = total_transactions(transactions).ok_or(StatsError::CountOverflow)?;
        ensure_sufficient(sample_size)?;

        let midpoints = midpoints(min_prices, max_prices)?;
        // Non-empty: a positive total implies at least one bucket
        let stats = SummaryStatistics::from_data(&midpoints)
            .ok_or(StatsError::InsufficientSample { sample_size })?;

        tracing::debug!(
            "Summarized {} buckets holding {} transactions",
            midpoints.len(),
            sample_size
        );

        Ok(Self {
            midpoints,
            sample_size,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_count_overflow_is_an_error() {
        let result = EmpiricalSummary::from_buckets(&[1.0, 2.0], &[3.0, 4.0], &[u64::MAX, 1]);
        assert_eq!(result, Err(StatsError::CountOverflow));
        assert_eq!(total_transactions(&[u64::MAX, 0]), Some(u64::MAX));
    }

    #[test]
    fn test_midpoints() {
        let mids = midpoints(&[1000.0, 2000.0], &[3000.0, 2500.0]).unwrap();
        assert_eq!(mids, vec![2000.0, 2250.0]);
    }

    #[test]
    fn test_median_of_four_midpoints() {
        let summary = EmpiricalSummary::from_buckets(
            &[50.0, 150.0, 250.0, 350.0],
            &[150.0, 250.0, 350.0, 450.0],
            &[3, 3, 3, 3],
        )
        .unwrap();

        assert_eq!(summary.midpoints, vec![100.0, 200.0, 300.0, 400.0]);
        assert_eq!(summary.sample_size, 12);
        assert!((summary.stats.median - 250.0).abs() < 1e-10);
        assert!((summary.stats.mean - 250.0).abs() < 1e-10);
        assert!((summary.stats.q25 - 175.0).abs() < 1e-10);
        assert!((summary.stats.q75 - 325.0).abs() < 1e-10);
        assert_eq!(summary.stats.min, 100.0);
        assert_eq!(summary.stats.max, 400.0);
    }

    #[rstest]
    #[case(&[2, 1])]
    #[case(&[4, 0])]
    #[case(&[0, 0])]
    fn test_insufficient_sample(#[case] counts: &[u64]) {
        let err = EmpiricalSummary::from_buckets(&[100.0, 200.0], &[150.0, 250.0], counts)
            .unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientSample {
                sample_size: counts.iter().sum()
            }
        );
    }

    #[test]
    fn test_threshold_counts_transactions_not_buckets() {
        // One bucket, five transactions: enough
        let summary = EmpiricalSummary::from_buckets(&[100.0], &[200.0], &[5]).unwrap();
        assert_eq!(summary.stats.median, 150.0);

        // Ten buckets with zero transactions: not enough
        let zeros = vec![0; 10];
        let prices = vec![100.0; 10];
        assert!(EmpiricalSummary::from_buckets(&prices, &prices, &zeros).is_err());
    }

    #[test]
    fn test_empty_response_is_insufficient() {
        assert_eq!(
            EmpiricalSummary::from_buckets(&[], &[], &[]),
            Err(StatsError::InsufficientSample { sample_size: 0 })
        );
    }

    #[test]
    fn test_length_mismatch() {
        let err = EmpiricalSummary::from_buckets(&[1.0, 2.0], &[1.0], &[5, 5]).unwrap_err();
        assert!(matches!(err, StatsError::LengthMismatch { max_len: 1, .. }));

        let err = EmpiricalSummary::from_buckets(&[1.0], &[1.0], &[5, 5]).unwrap_err();
        assert!(matches!(err, StatsError::LengthMismatch { count_len: 2, .. }));
    }
}
