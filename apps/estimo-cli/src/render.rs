//! Terminal output for estimate outcomes

use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use estimo_chart::{format_grouped, MarkerColor, Statistic, SummaryLine};
use estimo_client::{PricePerSquareMeterOutcome, ValuationOutcome};
use estimo_stats::ONE_SIGMA_COVERAGE_PERCENT;

fn table_color(color: MarkerColor) -> Color {
    match color {
        MarkerColor::Red => Color::Red,
        MarkerColor::Blue => Color::Blue,
        MarkerColor::Green => Color::Green,
        MarkerColor::Purple => Color::Magenta,
        MarkerColor::Black => Color::Reset,
    }
}

/// Summary lines, colored with terminal escapes when `ansi` is set
pub fn format_lines(lines: &[SummaryLine], ansi: bool) -> String {
    lines
        .iter()
        .map(|line| {
            if ansi {
                format!("{}{}\x1b[0m", line.color.ansi_fg(), line.text)
            } else {
                line.text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn price_per_square_meter_table(outcome: &PricePerSquareMeterOutcome) -> Table {
    let stats = &outcome.summary.stats;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Statistic", "€ / m²", "Marker"]);

    for statistic in Statistic::ALL {
        let value = match statistic {
            Statistic::Mean => stats.mean,
            Statistic::Median => stats.median,
            Statistic::Q25 => stats.q25,
            Statistic::Q75 => stats.q75,
            Statistic::Min => stats.min,
            Statistic::Max => stats.max,
        };
        let color = statistic.color();
        table.add_row(vec![
            Cell::new(statistic.label()),
            Cell::new(format_grouped(value)),
            Cell::new(color.name()).fg(table_color(color)),
        ]);
    }

    table.add_row(vec![
        Cell::new("Buckets"),
        Cell::new(outcome.summary.midpoints.len()),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Transactions"),
        Cell::new(outcome.summary.sample_size),
        Cell::new(""),
    ]);
    table
}

pub fn valuation_table(outcome: &ValuationOutcome) -> Table {
    let summary = outcome.summary();
    let (low, high) = summary.interval(1.0);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["", "€"]);

    table.add_row(vec![Cell::new("Most likely price"), Cell::new(format_grouped(summary.mean))]);
    table.add_row(vec![
        Cell::new("Standard deviation"),
        Cell::new(format_grouped(summary.std_dev)),
    ]);
    table.add_row(vec![
        Cell::new(format!("{}% range low", ONE_SIGMA_COVERAGE_PERCENT)),
        Cell::new(format_grouped(low)),
    ]);
    table.add_row(vec![
        Cell::new(format!("{}% range high", ONE_SIGMA_COVERAGE_PERCENT)),
        Cell::new(format_grouped(high)),
    ]);
    table.add_row(vec![Cell::new("Transactions"), Cell::new(summary.sample_size)]);
    table
}
