//! HTTP client for the estimation service using reqwest
//!
//! Each submission is a single `POST` of the compiled predicate. Failures
//! are never retried, and no timeout is set beyond the client default.

use estimo_query::Predicate;
use reqwest::Client;

use crate::config::ServiceConfig;
use crate::endpoint::{Estimation, ResponseShape, WherePayload};
use crate::error::{EstimateError, EstimateResult};

/// Undecoded successful response
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub struct EstimationClient {
    client: Client,
    service: ServiceConfig,
}

impl EstimationClient {
    pub fn new(service: ServiceConfig) -> EstimateResult<Self> {
        let client = Client::builder()
            .user_agent(service.user_agent.clone())
            .build()
            .map_err(|e| EstimateError::transport(e.to_string()))?;

        Ok(Self { client, service })
    }

    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Post `predicate` to the estimation's endpoint
    ///
    /// Connection failures and non-2xx statuses become
    /// [`EstimateError::Transport`].
    pub async fn submit_raw(
        &self,
        predicate: &Predicate,
        estimation: Estimation,
    ) -> EstimateResult<RawResponse> {
        let url = estimation.url(&self.service);
        let payload = WherePayload {
            where_clause: predicate.render(),
        };

        tracing::info!("Requesting {} estimate from {}", estimation.name(), url);
        tracing::debug!("Payload carries {} clauses", payload.where_clause.len());

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Request to {} failed: {}", url, e);
                EstimateError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered with status {}", url, status);
            return Err(EstimateError::transport(format!(
                "HTTP {} for url: {}",
                status, url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| EstimateError::transport(e.to_string()))?;

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Post `predicate` and decode the body as `R`
    ///
    /// A body that is not `R` becomes [`EstimateError::ResponseShape`].
    pub async fn submit<R: ResponseShape>(&self, predicate: &Predicate) -> EstimateResult<R> {
        let raw = self.submit_raw(predicate, R::ESTIMATION).await?;
        tracing::debug!("Status {} with {} byte body", raw.status, raw.body.len());
        decode(&raw.body)
    }
}

/// Decode a response body
pub fn decode<R: ResponseShape>(body: &str) -> EstimateResult<R> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("Malformed {} response: {}", R::ESTIMATION.name(), e);
        EstimateError::response_shape(e.to_string())
    })
}
