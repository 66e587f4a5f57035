//! Normal distribution chart of a property valuation

use estimo_stats::{linspace, ParametricSummary};

use crate::axis::{AxisConfig, TickFormat};
use crate::chart::{ChartDescription, DataPoint, Fill, Trace};
use crate::currency::{format_currency_thousands, format_percent, CURRENCY_SYMBOL};
use crate::error::{ChartError, ChartResult};

/// Curve resolution
pub const NORMAL_POINTS: usize = 1000;
/// The curve spans mean ± this many standard deviations
pub const NORMAL_SIGMAS: f64 = 3.0;
/// Height the curve's peak is scaled to
pub const NORMAL_PEAK: f64 = 0.5;

/// Build the valuation chart: a Gaussian over mean ± 3σ, scaled so that its
/// highest sampled point is [`NORMAL_PEAK`].
pub fn render_valuation(summary: &ParametricSummary) -> ChartResult<ChartDescription> {
    if !summary.mean.is_finite() {
        return Err(ChartError::InvalidParameter {
            name: "mean",
            value: summary.mean,
        });
    }
    if !summary.std_dev.is_finite() || summary.std_dev <= 0.0 {
        return Err(ChartError::InvalidParameter {
            name: "standard deviation",
            value: summary.std_dev,
        });
    }

    let (start, end) = summary.interval(NORMAL_SIGMAS);
    let xs = linspace(start, end, NORMAL_POINTS);
    let densities: Vec<f64> = xs.iter().map(|&x| summary.density(x)).collect();
    let peak = densities.iter().copied().fold(0.0, f64::max);
    if !(peak > 0.0) {
        return Err(ChartError::InvalidParameter {
            name: "standard deviation",
            value: summary.std_dev,
        });
    }

    let (points, hover_text): (Vec<DataPoint>, Vec<String>) = xs
        .into_iter()
        .zip(densities)
        .map(|(x, density)| {
            let y = density / peak * NORMAL_PEAK;
            (
                DataPoint { x, y },
                format!(
                    "The price of {} has a likelihood of {}",
                    format_currency_thousands(x),
                    format_percent(y)
                ),
            )
        })
        .unzip();

    let x_axis = AxisConfig::new("Price", start, end)
        .with_format(TickFormat::Grouped)
        .with_prefix(CURRENCY_SYMBOL);
    let y_axis =
        AxisConfig::new("Probability Density", 0.0, NORMAL_PEAK).with_format(TickFormat::Percent);

    Ok(ChartDescription {
        title: format!(
            "Estimated Price Distribution, based on {} transactions within the last 2 years",
            summary.sample_size
        ),
        x_axis,
        y_axis,
        traces: vec![Trace {
            name: String::new(),
            points,
            hover_text,
            fill: Fill::ToZeroY,
        }],
        markers: Vec::new(),
        show_legend: false,
    })
}
