//! Chart description types
//!
//! A [`ChartDescription`] is plain data: a density curve, vertical statistic
//! markers and two axes. Front ends draw it however they like; the JSON form
//! is what the CLI writes to disk.

use serde::{Deserialize, Serialize};

use crate::axis::{calculate_ticks, AxisConfig, TickMark};
use crate::color::{MarkerColor, Statistic};
use crate::error::ChartResult;

/// A sampled point of a curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// Area fill below a trace
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    None,
    ToZeroY,
}

/// A line trace with per-point hover text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub points: Vec<DataPoint>,
    /// One entry per point
    pub hover_text: Vec<String>,
    pub fill: Fill,
}

impl Trace {
    /// Largest y value, 0 for an empty trace
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(0.0, f64::max)
    }

    /// First and last x value
    pub fn x_span(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }
}

/// Line style of a marker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDash {
    Solid,
    Dash,
}

/// A vertical line at a statistic's value spanning the plot height
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub statistic: Statistic,
    pub value: f64,
    pub color: MarkerColor,
    pub dash: LineDash,
    pub width: f32,
}

impl Marker {
    /// Dashed, width 2, in the statistic's color
    pub fn for_statistic(statistic: Statistic, value: f64) -> Self {
        Self {
            statistic,
            value,
            color: statistic.color(),
            dash: LineDash::Dash,
            width: 2.0,
        }
    }
}

/// Everything needed to draw a distribution chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub title: String,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub traces: Vec<Trace>,
    pub markers: Vec<Marker>,
    pub show_legend: bool,
}

impl ChartDescription {
    /// The first trace, which carries the distribution curve
    pub fn curve(&self) -> Option<&Trace> {
        self.traces.first()
    }

    /// Marker for a statistic, if the chart has one
    pub fn marker(&self, statistic: Statistic) -> Option<&Marker> {
        self.markers.iter().find(|m| m.statistic == statistic)
    }

    pub fn x_ticks(&self) -> Vec<TickMark> {
        calculate_ticks(&self.x_axis)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
