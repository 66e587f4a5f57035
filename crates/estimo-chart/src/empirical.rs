//! Kernel density chart of price per square meter
//!
//! The bucket midpoints are smoothed with a Gaussian KDE sampled at
//! [`KDE_POINTS`] positions, density is shown in percent, and the six
//! summary statistics are drawn as dashed vertical lines.

use estimo_stats::{EmpiricalSummary, GaussianKde};

use crate::axis::{AxisConfig, TickFormat};
use crate::chart::{ChartDescription, DataPoint, Fill, Marker, Trace};
use crate::color::Statistic;
use crate::currency::format_grouped;
use crate::error::{ChartError, ChartResult};

/// Curve resolution
pub const KDE_POINTS: usize = 500;
/// Density is displayed in percent
pub const DENSITY_SCALE: f64 = 100.0;
/// Y axis extends this far above the curve's peak
pub const Y_HEADROOM: f64 = 1.1;
/// Price axis tick spacing in euros
pub const PRICE_TICK_STEP: f64 = 500.0;

/// Build the price-per-square-meter density chart.
pub fn render_price_density(summary: &EmpiricalSummary) -> ChartResult<ChartDescription> {
    let kde = GaussianKde::new(&summary.midpoints).ok_or(ChartError::EmptySample)?;
    let stats = &summary.stats;

    let (points, hover_text): (Vec<DataPoint>, Vec<String>) = kde
        .curve(KDE_POINTS)
        .into_iter()
        .map(|(x, density)| {
            (
                DataPoint {
                    x,
                    y: density * DENSITY_SCALE,
                },
                format!("Price per square meter: {}", format_grouped(x)),
            )
        })
        .unzip();

    let trace = Trace {
        name: "Average Price per Square Meter".to_string(),
        points,
        hover_text,
        fill: Fill::None,
    };

    let (curve_start, curve_end) = trace.x_span().ok_or(ChartError::EmptySample)?;
    let x_axis = AxisConfig::new(
        "Price per Square Meter",
        curve_start.min(stats.min),
        curve_end.max(stats.max),
    )
    .with_linear_ticks(0.0, PRICE_TICK_STEP)
    .with_format(TickFormat::Grouped)
    .with_grid();
    let y_axis = AxisConfig::new("Density (%)", 0.0, trace.peak() * Y_HEADROOM);

    let markers = Statistic::ALL
        .into_iter()
        .map(|statistic| {
            let value = match statistic {
                Statistic::Mean => stats.mean,
                Statistic::Median => stats.median,
                Statistic::Q25 => stats.q25,
                Statistic::Q75 => stats.q75,
                Statistic::Min => stats.min,
                Statistic::Max => stats.max,
            };
            Marker::for_statistic(statistic, value)
        })
        .collect();

    Ok(ChartDescription {
        title: "KDE Plot of Prices per Square Meter".to_string(),
        x_axis,
        y_axis,
        traces: vec![trace],
        markers,
        show_legend: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::MarkerColor;

    fn summary() -> EmpiricalSummary {
        EmpiricalSummary::from_buckets(
            &[1800.0, 2200.0, 2600.0, 3000.0, 3900.0],
            &[2200.0, 2600.0, 3000.0, 3400.0, 4100.0],
            &[3, 4, 2, 2, 1],
        )
        .unwrap()
    }

    #[test]
    fn test_curve_shape() {
        let chart = render_price_density(&summary()).unwrap();
        let curve = chart.curve().unwrap();

        assert_eq!(curve.points.len(), KDE_POINTS);
        assert_eq!(curve.hover_text.len(), KDE_POINTS);
        assert_eq!(curve.points[0].x, 2000.0);
        assert!(curve.points.iter().all(|p| p.y >= 0.0));
        assert!((chart.y_axis.max - curve.peak() * 1.1).abs() < 1e-12);
        assert_eq!(chart.x_axis.max, 4000.0);
    }

    #[test]
    fn test_markers() {
        let chart = render_price_density(&summary()).unwrap();
        assert_eq!(chart.markers.len(), 6);

        let mean = chart.marker(Statistic::Mean).unwrap();
        assert_eq!(mean.color, MarkerColor::Red);
        assert!((mean.value - 2880.0).abs() < 1e-9);

        let median = chart.marker(Statistic::Median).unwrap();
        assert_eq!(median.color, MarkerColor::Blue);
        assert_eq!(median.value, 2800.0);

        assert_eq!(chart.marker(Statistic::Q25).unwrap().value, 2400.0);
        assert_eq!(chart.marker(Statistic::Max).unwrap().color, MarkerColor::Purple);
    }

    #[test]
    fn test_hover_text_and_ticks() {
        let chart = render_price_density(&summary()).unwrap();
        let curve = chart.curve().unwrap();
        assert_eq!(curve.hover_text[0], "Price per square meter: 2,000");

        let ticks: Vec<f64> = chart.x_ticks().iter().map(|t| t.value).collect();
        assert_eq!(ticks, vec![2000.0, 2500.0, 3000.0, 3500.0, 4000.0]);
    }

    #[test]
    fn test_density_in_percent() {
        let summary = summary();
        let chart = render_price_density(&summary).unwrap();
        let kde = GaussianKde::new(&summary.midpoints).unwrap();
        let first = chart.curve().unwrap().points[0];
        assert!((first.y - kde.evaluate(first.x) * 100.0).abs() < 1e-12);
    }
}
