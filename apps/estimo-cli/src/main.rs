//! Estimo CLI
//!
//! Submits property filters to the estimation service and prints the
//! resulting statistics.

mod cli;
mod render;

use std::io::IsTerminal;
use std::path::Path;

use chrono::Datelike;
use clap::Parser;
use estimo_chart::ChartDescription;
use estimo_client::{
    estimate_price_per_square_meter, estimate_valuation, ErrorKind, EstimateError,
    EstimationClient, EstimoConfig,
};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let project_root = std::env::current_dir().ok();
    let config = EstimoConfig::load_standard(project_root.as_deref(), cli.config.as_deref())?;
    let client = EstimationClient::new(config.service)?;

    let current_year = chrono::Local::now().year();
    let args = cli.command.filters();
    let ansi = std::io::stdout().is_terminal();

    let filters = match args.to_filter_set(current_year) {
        Ok(filters) => filters,
        Err(err) => return fail(EstimateError::from(err)),
    };

    match &cli.command {
        Commands::PricePerSquareMeter(_) => {
            match estimate_price_per_square_meter(&client, &filters, current_year).await {
                Ok(outcome) => {
                    println!("{}", render::format_lines(&outcome.lines(), ansi));
                    println!("{}", render::price_per_square_meter_table(&outcome));
                    write_chart(args.chart.as_deref(), &outcome.chart)?;
                }
                Err(err) => return fail(err),
            }
        }
        Commands::Valuation(_) => match estimate_valuation(&client, &filters, current_year).await {
            Ok(outcome) => {
                println!("{}", render::format_lines(&outcome.lines(), ansi));
                println!("{}", render::valuation_table(&outcome));
                write_chart(args.chart.as_deref(), &outcome.chart)?;
            }
            Err(err) => return fail(err),
        },
    }

    Ok(())
}

/// Print the user-facing message; only real failures exit non-zero
fn fail(err: EstimateError) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!("Estimate ended with {:?}: {}", err.kind(), err);
    if err.kind() == ErrorKind::InsufficientSample {
        println!("{}", err.user_message());
        return Ok(());
    }
    eprintln!("{}", err.user_message());
    std::process::exit(1);
}

fn write_chart(
    path: Option<&Path>,
    chart: &ChartDescription,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        std::fs::write(path, chart.to_json()?)?;
        tracing::info!("Wrote chart to {}", path.display());
    }
    Ok(())
}
