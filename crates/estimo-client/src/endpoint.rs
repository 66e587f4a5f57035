//! Estimation endpoints and their response shapes
//!
//! Both pipelines share one client; an [`Estimation`] picks the path and the
//! filters it accepts, and a [`ResponseShape`] type names the body expected
//! back.

use estimo_query::Ownership;
use estimo_stats::{total_transactions, EmpiricalSummary, ParametricSummary, StatsResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;

/// The two estimations offered by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimation {
    PricePerSquareMeter,
    Valuation,
}

impl Estimation {
    pub fn name(&self) -> &'static str {
        match self {
            Estimation::PricePerSquareMeter => "price per square meter",
            Estimation::Valuation => "valuation",
        }
    }

    /// Endpoint path under the service base URL
    pub fn path<'a>(&self, service: &'a ServiceConfig) -> &'a str {
        match self {
            Estimation::PricePerSquareMeter => &service.price_per_square_meter_path,
            Estimation::Valuation => &service.valuation_path,
        }
    }

    /// Full endpoint URL
    pub fn url(&self, service: &ServiceConfig) -> String {
        let base = service.base_url.trim_end_matches('/');
        let path = self.path(service);
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Ownership types this estimation refuses
    pub fn unsupported_ownership(&self) -> &'static [Ownership] {
        match self {
            Estimation::PricePerSquareMeter => &[Ownership::Unknown],
            Estimation::Valuation => &[],
        }
    }
}

/// A response body bound to the estimation that produces it
pub trait ResponseShape: DeserializeOwned {
    const ESTIMATION: Estimation;
}

/// Request body sent to every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WherePayload {
    pub where_clause: Vec<String>,
}

/// Per-bucket prices and counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePerSquareMeterResponse {
    pub min_prices_per_square_meter: Vec<f64>,
    pub max_prices_per_square_meter: Vec<f64>,
    pub transactions: Vec<u64>,
}

impl PricePerSquareMeterResponse {
    /// Total transactions, `None` when the counts overflow
    pub fn sample_size(&self) -> Option<u64> {
        total_transactions(&self.transactions)
    }

    pub fn summarize(&self) -> StatsResult<EmpiricalSummary> {
        EmpiricalSummary::from_buckets(
            &self.min_prices_per_square_meter,
            &self.max_prices_per_square_meter,
            &self.transactions,
        )
    }
}

impl ResponseShape for PricePerSquareMeterResponse {
    const ESTIMATION: Estimation = Estimation::PricePerSquareMeter;
}

/// Aggregated valuation triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResponse {
    pub mean: f64,
    pub standard_deviation: f64,
    pub sample_size: u64,
}

impl ValuationResponse {
    pub fn summarize(&self) -> StatsResult<ParametricSummary> {
        ParametricSummary::new(self.mean, self.standard_deviation, self.sample_size)
    }
}

impl ResponseShape for ValuationResponse {
    const ESTIMATION: Estimation = Estimation::Valuation;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://host:8000", Estimation::Valuation, "http://host:8000/property-price-valuation/")]
    #[case("http://host:8000/", Estimation::Valuation, "http://host:8000/property-price-valuation/")]
    #[case(
        "http://host",
        Estimation::PricePerSquareMeter,
        "http://host/get-price-per-square-meters/"
    )]
    fn test_url(#[case] base: &str, #[case] estimation: Estimation, #[case] expected: &str) {
        let service = ServiceConfig::with_base_url(base);
        assert_eq!(estimation.url(&service), expected);
    }

    #[test]
    fn test_relative_path() {
        let service = ServiceConfig {
            valuation_path: "valuation".into(),
            ..ServiceConfig::with_base_url("http://host")
        };
        assert_eq!(Estimation::Valuation.url(&service), "http://host/valuation");
    }

    #[test]
    fn test_unknown_ownership_only_for_valuation() {
        assert_eq!(
            Estimation::PricePerSquareMeter.unsupported_ownership(),
            &[Ownership::Unknown]
        );
        assert!(Estimation::Valuation.unsupported_ownership().is_empty());
    }

    #[test]
    fn test_payload_shape() {
        let payload = WherePayload {
            where_clause: vec!["year_built >= 1975".into()],
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"where_clause":["year_built >= 1975"]}"#
        );
    }

    #[test]
    fn test_bucket_response() {
        let response: PricePerSquareMeterResponse = serde_json::from_str(
            r#"{"min_prices_per_square_meter": [3000.0, 4000],
                "max_prices_per_square_meter": [3500.0, 4500],
                "transactions": [2, 3]}"#,
        )
        .unwrap();
        assert_eq!(response.sample_size(), Some(5));
        assert_eq!(response.summarize().unwrap().midpoints, vec![3250.0, 4250.0]);
    }

    #[test]
    fn test_valuation_response_missing_field() {
        let result = serde_json::from_str::<ValuationResponse>(r#"{"mean": 1.0, "sample_size": 3}"#);
        assert!(result.is_err());
    }
}
