//! Text shown alongside the charts.
//!
//! Line colors match the chart markers they describe.

use estimo_stats::{EmpiricalSummary, ParametricSummary, ONE_SIGMA_COVERAGE_PERCENT};
use serde::{Deserialize, Serialize};

use crate::color::MarkerColor;
use crate::currency::{format_currency_tenths, format_currency_thousands};

/// Shown instead of a chart when too few transactions match
pub const INSUFFICIENT_SAMPLE_MESSAGE: &str = "Your search parameters yielded 4 or fewer property transactions. \
     Please widen your filters in order to see results";

/// One colored line of summary text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub text: String,
    pub color: MarkerColor,
}

impl SummaryLine {
    fn new(color: MarkerColor, text: String) -> Self {
        Self { text, color }
    }
}

/// Summary of a price-per-square-meter estimate
pub fn price_per_square_meter_lines(summary: &EmpiricalSummary) -> Vec<SummaryLine> {
    let stats = &summary.stats;
    vec![
        SummaryLine::new(
            MarkerColor::Red,
            format!(
                "Average square meter price: {}",
                format_currency_tenths(stats.mean)
            ),
        ),
        SummaryLine::new(
            MarkerColor::Blue,
            format!(
                "Median square meter price: {}",
                format_currency_tenths(stats.median)
            ),
        ),
        SummaryLine::new(
            MarkerColor::Green,
            format!(
                "50% of the relevant properties have a square meter price between {} and {} (25-75 percentiles)",
                format_currency_tenths(stats.q25),
                format_currency_tenths(stats.q75)
            ),
        ),
        SummaryLine::new(
            MarkerColor::Purple,
            format!(
                "The lowest price per square meter is {} and the highest is {}",
                format_currency_tenths(stats.min),
                format_currency_tenths(stats.max)
            ),
        ),
        SummaryLine::new(
            MarkerColor::Black,
            format!(
                "The plot and metrics are based on {} relevant property transactions",
                summary.sample_size
            ),
        ),
    ]
}

/// Summary of a property valuation
pub fn valuation_lines(summary: &ParametricSummary) -> Vec<SummaryLine> {
    let (low, high) = summary.interval(1.0);
    vec![
        SummaryLine::new(
            MarkerColor::Black,
            format!(
                "The most likely price for the property is {}",
                format_currency_thousands(summary.mean)
            ),
        ),
        SummaryLine::new(
            MarkerColor::Black,
            format!(
                "{}% of properties like this would be priced between {} and {}",
                ONE_SIGMA_COVERAGE_PERCENT,
                format_currency_thousands(low),
                format_currency_thousands(high)
            ),
        ),
        SummaryLine::new(
            MarkerColor::Black,
            format!(
                "This price estimation is based on {} transactions from the last 2 years",
                summary.sample_size
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_per_square_meter_lines() {
        let summary = EmpiricalSummary::from_buckets(
            &[3000.0, 4000.0, 5000.0],
            &[3500.0, 4500.0, 5500.0],
            &[2, 2, 2],
        )
        .unwrap();
        let lines = price_per_square_meter_lines(&summary);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].text, "Average square meter price: €4.2k");
        assert_eq!(lines[0].color, MarkerColor::Red);
        assert_eq!(lines[1].text, "Median square meter price: €4.2k");
        assert!(lines[2].text.contains("between €3.8k and €4.8k"));
        assert_eq!(lines[3].color, MarkerColor::Purple);
        assert!(lines[4].text.contains("based on 6 relevant"));
    }

    #[test]
    fn test_valuation_lines_keep_seventy_percent() {
        let summary = ParametricSummary::new(300_000.0, 50_000.0, 120).unwrap();
        let lines = valuation_lines(&summary);

        assert_eq!(lines[0].text, "The most likely price for the property is €300k");
        assert_eq!(
            lines[1].text,
            "70% of properties like this would be priced between €250k and €350k"
        );
        assert!(lines[2].text.contains("120 transactions"));
    }
}
