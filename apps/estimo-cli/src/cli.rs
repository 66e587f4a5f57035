//! Command line definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use estimo_query::{
    parse_query_string, BuildingType, City, Condition, FilterSet, Ownership, QueryResult,
    RoomCount, DEFAULT_SQUARE_METERS, DEFAULT_START_YEAR,
};

/// Estimo - price estimates for residential property
#[derive(Parser, Debug)]
#[command(name = "estimo", version)]
#[command(after_help = "\
Examples:
  estimo price-per-m2 --city helsinki --rooms 2,3
  estimo price-per-m2 --postal-codes 00100,00120 --chart density.json
  estimo valuation --start-year 1990 --end-year 2010 --min-m2 50 --max-m2 70
  estimo valuation --query 'postal_code=00740&room_numbers=2|3&prop_type=kt'")]
pub struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file applied over ~/.estimo and ./.estimo
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Distribution of price per square meter over matching sales
    #[command(name = "price-per-m2")]
    PricePerSquareMeter(FilterArgs),

    /// Likely price of a property matching the filters
    Valuation(FilterArgs),
}

impl Commands {
    pub fn filters(&self) -> &FilterArgs {
        match self {
            Commands::PricePerSquareMeter(args) | Commands::Valuation(args) => args,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Comma separated five digit postal codes
    #[arg(long)]
    pub postal_codes: Option<String>,

    /// Earliest year built
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Latest year built (default: current year)
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Smallest floor area in square meters
    #[arg(long)]
    pub min_m2: Option<f64>,

    /// Largest floor area in square meters
    #[arg(long)]
    pub max_m2: Option<f64>,

    /// Cities (e.g. helsinki,espoo)
    #[arg(long, value_delimiter = ',', value_parser = parse_city)]
    pub city: Vec<City>,

    /// Plot ownership: owned, rented, unknown (valuation only)
    #[arg(long, value_delimiter = ',', value_parser = parse_ownership)]
    pub ownership: Vec<Ownership>,

    /// Room counts 1-4, where 4 means four or more
    #[arg(long, value_delimiter = ',', value_parser = parse_rooms)]
    pub rooms: Vec<RoomCount>,

    /// Building types: kt (apartment), rt (row house), ok (detached)
    #[arg(long, value_delimiter = ',', value_parser = parse_building_type)]
    pub building_type: Vec<BuildingType>,

    /// Condition: good, ok, bad
    #[arg(long, value_delimiter = ',', value_parser = parse_condition)]
    pub condition: Vec<Condition>,

    /// Encoded query parameters, used instead of the filter flags above
    #[arg(
        long,
        conflicts_with_all = [
            "postal_codes", "start_year", "end_year", "min_m2", "max_m2",
            "city", "ownership", "rooms", "building_type", "condition",
        ]
    )]
    pub query: Option<String>,

    /// Write the chart description as JSON to this path
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

impl FilterArgs {
    /// Build the filter set, starting from the default selection
    pub fn to_filter_set(&self, current_year: i32) -> QueryResult<FilterSet> {
        if let Some(query) = &self.query {
            return FilterSet::from_query_params(&parse_query_string(query), current_year);
        }

        let year_built = (
            self.start_year.unwrap_or(DEFAULT_START_YEAR),
            self.end_year.unwrap_or(current_year),
        );
        let square_meters = (
            self.min_m2.unwrap_or(DEFAULT_SQUARE_METERS.0),
            self.max_m2.unwrap_or(DEFAULT_SQUARE_METERS.1),
        );

        Ok(FilterSet::new(year_built, square_meters)
            .with_postal_codes(self.postal_codes.clone().unwrap_or_default())
            .with_cities(self.city.iter().copied())
            .with_ownership(self.ownership.iter().copied())
            .with_rooms(self.rooms.iter().copied())
            .with_building_types(self.building_type.iter().copied())
            .with_conditions(self.condition.iter().copied()))
    }
}

fn parse_city(s: &str) -> Result<City, String> {
    City::from_token(s).ok_or_else(|| format!("unknown city '{}'", s))
}

fn parse_ownership(s: &str) -> Result<Ownership, String> {
    Ownership::from_token(s).ok_or_else(|| format!("unknown ownership type '{}'", s))
}

fn parse_rooms(s: &str) -> Result<RoomCount, String> {
    RoomCount::from_token(s).ok_or_else(|| format!("room count must be 1-4, got '{}'", s))
}

fn parse_building_type(s: &str) -> Result<BuildingType, String> {
    BuildingType::from_token(s).ok_or_else(|| format!("unknown building type '{}'", s))
}

fn parse_condition(s: &str) -> Result<Condition, String> {
    Condition::from_token(s).ok_or_else(|| format!("unknown condition '{}'", s))
}
