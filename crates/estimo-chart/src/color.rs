//! Statistic marker colors
//!
//! Colors carry meaning: the summary text refers to "the red line" for the
//! mean and so on, so each statistic always gets the same color.

use serde::{Deserialize, Serialize};

/// Named marker colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerColor {
    Red,
    Blue,
    Green,
    Purple,
    Black,
}

impl MarkerColor {
    /// CSS color name
    pub fn name(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
            MarkerColor::Purple => "purple",
            MarkerColor::Black => "black",
        }
    }

    /// Hex value of the CSS named color
    pub fn to_hex(&self) -> &'static str {
        match self {
            MarkerColor::Red => "#FF0000",
            MarkerColor::Blue => "#0000FF",
            MarkerColor::Green => "#008000",
            MarkerColor::Purple => "#800080",
            MarkerColor::Black => "#000000",
        }
    }

    /// 24-bit terminal escape for the foreground
    pub fn ansi_fg(&self) -> &'static str {
        match self {
            MarkerColor::Red => "\x1b[38;2;255;0;0m",
            MarkerColor::Blue => "\x1b[38;2;0;0;255m",
            MarkerColor::Green => "\x1b[38;2;0;128;0m",
            MarkerColor::Purple => "\x1b[38;2;128;0;128m",
            MarkerColor::Black => "\x1b[39m",
        }
    }
}

/// The statistics a distribution chart marks with vertical lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    Mean,
    Median,
    Q25,
    Q75,
    Min,
    Max,
}

impl Statistic {
    /// Marker order on the chart
    pub const ALL: [Statistic; 6] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Q25,
        Statistic::Q75,
        Statistic::Min,
        Statistic::Max,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::Q25 => "Q25",
            Statistic::Q75 => "Q75",
            Statistic::Min => "Min",
            Statistic::Max => "Max",
        }
    }

    pub fn color(&self) -> MarkerColor {
        match self {
            Statistic::Mean => MarkerColor::Red,
            Statistic::Median => MarkerColor::Blue,
            Statistic::Q25 | Statistic::Q75 => MarkerColor::Green,
            Statistic::Min | Statistic::Max => MarkerColor::Purple,
        }
    }
}
