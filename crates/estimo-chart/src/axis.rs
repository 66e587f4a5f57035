//! Axis description for distribution charts
//!
//! Provides tick mark calculation and label formatting for the price and
//! density axes.

use serde::{Deserialize, Serialize};

use crate::currency::{format_grouped, format_percent};

/// How tick positions are chosen
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TickMode {
    /// Roughly five "nice" steps (1, 2 or 5 times a power of ten)
    Auto,
    /// Every `step`, aligned to `start`
    Linear { start: f64, step: f64 },
}

/// How tick labels are written
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    /// Integer with thousands separators: `12,500`
    Grouped,
    /// Fraction as whole percent: `0.25` → `25%`
    Percent,
    /// Shortest plain number
    Plain,
}

/// Configuration for an axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Axis title
    pub title: String,

    /// Data range shown
    pub min: f64,
    pub max: f64,

    /// Tick placement
    pub ticks: TickMode,

    /// Label format
    pub format: TickFormat,

    /// Prepended to every tick label (e.g. "€")
    pub tick_prefix: Option<String>,

    /// Whether to show grid lines
    pub show_grid: bool,
}

impl AxisConfig {
    /// Create a new axis configuration
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            title: title.into(),
            min,
            max,
            ticks: TickMode::Auto,
            format: TickFormat::Plain,
            tick_prefix: None,
            show_grid: false,
        }
    }

    /// Place ticks every `step` starting from `start`
    pub fn with_linear_ticks(mut self, start: f64, step: f64) -> Self {
        self.ticks = TickMode::Linear { start, step };
        self
    }

    /// Set the label format
    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a label prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tick_prefix = Some(prefix.into());
        self
    }

    /// Enable grid lines
    pub fn with_grid(mut self) -> Self {
        self.show_grid = true;
        self
    }

    /// Format a value the way this axis labels its ticks
    pub fn label(&self, value: f64) -> String {
        let text = format_number(value, self.format);
        match &self.tick_prefix {
            Some(prefix) => format!("{prefix}{text}"),
            None => text,
        }
    }
}

/// A tick mark on an axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Position in data coordinates
    pub value: f64,

    /// Position in normalized coordinates (0.0 to 1.0)
    pub normalized: f64,

    /// Label text
    pub label: String,
}

/// Calculate tick marks for an axis
pub fn calculate_ticks(config: &AxisConfig) -> Vec<TickMark> {
    let range = config.max - config.min;
    if !(range > 0.0) || !range.is_finite() {
        return vec![];
    }

    let (start, step) = match config.ticks {
        TickMode::Auto => {
            let step = nice_step(range);
            ((config.min / step).ceil() * step, step)
        }
        TickMode::Linear { start, step } => {
            if !(step > 0.0) {
                return vec![];
            }
            let first = start + ((config.min - start) / step).ceil() * step;
            (first, step)
        }
    };

    let mut ticks = Vec::new();
    let mut i = 0.0;
    loop {
        let value = start + i * step;
        if value > config.max + step * 0.001 {
            break;
        }
        let normalized = (value - config.min) / range;
        ticks.push(TickMark {
            value,
            normalized: normalized.clamp(0.0, 1.0),
            label: config.label(value),
        });
        i += 1.0;
    }
    ticks
}

/// Step giving roughly five ticks over `range`
fn nice_step(range: f64) -> f64 {
    let rough_step = range / 5.0;
    let magnitude = 10.0_f64.powf(rough_step.abs().log10().floor());
    let residual = rough_step / magnitude;

    if residual <= 1.5 {
        1.0 * magnitude
    } else if residual <= 3.0 {
        2.0 * magnitude
    } else if residual <= 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Format a number for display
fn format_number(value: f64, format: TickFormat) -> String {
    match format {
        TickFormat::Grouped => format_grouped(value),
        TickFormat::Percent => format_percent(value),
        TickFormat::Plain => {
            if value == 0.0 {
                "0".to_string()
            } else if value.fract().abs() < 1e-10 {
                format!("{:.0}", value)
            } else {
                let text = format!("{:.4}", value);
                text.trim_end_matches('0').trim_end_matches('.').to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_ticks_every_500() {
        let config = AxisConfig::new("Price per Square Meter", 1730.0, 3620.0)
            .with_linear_ticks(0.0, 500.0)
            .with_format(TickFormat::Grouped);
        let values: Vec<f64> = calculate_ticks(&config).iter().map(|t| t.value).collect();
        assert_eq!(values, vec![2000.0, 2500.0, 3000.0, 3500.0]);
    }

    #[test]
    fn test_auto_ticks() {
        let config = AxisConfig::new("x", 0.0, 10.0);
        let ticks = calculate_ticks(&config);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[5].label, "10");
    }

    #[test]
    fn test_prefixed_grouped_labels() {
        let config = AxisConfig::new("Price", 150_000.0, 450_000.0)
            .with_format(TickFormat::Grouped)
            .with_prefix("€");
        let ticks = calculate_ticks(&config);
        assert_eq!(ticks[0].label, "€150,000");
        assert_eq!(ticks.last().unwrap().label, "€450,000");
    }

    #[test]
    fn test_percent_labels() {
        let config = AxisConfig::new("Probability Density", 0.0, 0.5).with_format(TickFormat::Percent);
        let labels: Vec<String> = calculate_ticks(&config).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["0%", "10%", "20%", "30%", "40%", "50%"]);
    }

    #[test]
    fn test_empty_range() {
        assert!(calculate_ticks(&AxisConfig::new("x", 5.0, 5.0)).is_empty());
        assert!(calculate_ticks(&AxisConfig::new("x", 0.0, 1.0).with_linear_ticks(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_plain_format() {
        assert_eq!(format_number(0.0, TickFormat::Plain), "0");
        assert_eq!(format_number(123.0, TickFormat::Plain), "123");
        assert_eq!(format_number(0.025, TickFormat::Plain), "0.025");
    }
}
