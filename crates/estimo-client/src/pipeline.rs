//! Submit filters and turn the answer into statistics and a chart
//!
//! Every call returns a fresh outcome object. Nothing is cached here; a
//! caller wanting to re-render keeps the last outcome itself.

use estimo_chart::{
    price_per_square_meter_lines, render_price_density, render_valuation, valuation_lines,
    ChartDescription, SummaryLine,
};
use estimo_query::{compile, FilterBounds, FilterSet, Predicate};
use estimo_stats::{EmpiricalSummary, ParametricSummary};
use serde::{Deserialize, Serialize};

use crate::endpoint::{Estimation, PricePerSquareMeterResponse, ValuationResponse};
use crate::error::EstimateResult;
use crate::http::EstimationClient;

/// Result of a price-per-square-meter estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePerSquareMeterOutcome {
    pub response: PricePerSquareMeterResponse,
    pub summary: EmpiricalSummary,
    pub chart: ChartDescription,
}

impl PricePerSquareMeterOutcome {
    /// Build the outcome from a decoded response
    pub fn from_response(response: PricePerSquareMeterResponse) -> EstimateResult<Self> {
        let summary = response.summarize()?;
        let chart = render_price_density(&summary)?;
        Ok(Self {
            response,
            summary,
            chart,
        })
    }

    pub fn lines(&self) -> Vec<SummaryLine> {
        price_per_square_meter_lines(&self.summary)
    }
}

/// Result of a property valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationOutcome {
    pub response: ValuationResponse,
    pub chart: ChartDescription,
}

impl ValuationOutcome {
    pub fn from_response(response: ValuationResponse) -> EstimateResult<Self> {
        let chart = render_valuation(&response.summarize()?)?;
        Ok(Self { response, chart })
    }

    pub fn summary(&self) -> ParametricSummary {
        ParametricSummary {
            mean: self.response.mean,
            std_dev: self.response.standard_deviation,
            sample_size: self.response.sample_size,
        }
    }

    pub fn lines(&self) -> Vec<SummaryLine> {
        valuation_lines(&self.summary())
    }
}

/// Validate filters for `estimation` and compile them
///
/// Runs before any network call: bounds for `current_year`, ownership types
/// the endpoint refuses, then postal codes and range order.
pub fn prepare(
    filters: &FilterSet,
    estimation: Estimation,
    current_year: i32,
) -> EstimateResult<Predicate> {
    filters.validate(&FilterBounds::for_year(current_year))?;
    filters.reject_ownership(estimation.unsupported_ownership())?;
    Ok(compile(filters)?)
}

/// Run the price-per-square-meter pipeline
pub async fn estimate_price_per_square_meter(
    client: &EstimationClient,
    filters: &FilterSet,
    current_year: i32,
) -> EstimateResult<PricePerSquareMeterOutcome> {
    let predicate = prepare(filters, Estimation::PricePerSquareMeter, current_year)?;
    let response: PricePerSquareMeterResponse = client.submit(&predicate).await?;
    PricePerSquareMeterOutcome::from_response(response)
}

/// Run the valuation pipeline
pub async fn estimate_valuation(
    client: &EstimationClient,
    filters: &FilterSet,
    current_year: i32,
) -> EstimateResult<ValuationOutcome> {
    let predicate = prepare(filters, Estimation::Valuation, current_year)?;
    let response: ValuationResponse = client.submit(&predicate).await?;
    ValuationOutcome::from_response(response)
}
