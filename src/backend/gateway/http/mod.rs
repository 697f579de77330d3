//! reqwest-backed implementation of the backend gateways.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::backend::error::BackendError;
use crate::backend::locator::BackendLocator;
use crate::backend::models::{
    ApiBatchReport, ApiResponseRecord, BatchOutcome, ResponseId, ReviewItem, Verdict,
};

use super::client::build_http_client;
use super::error_mapping::{map_status_error, map_transport_error};
use super::{BatchGateway, RatingGateway, ResponseGateway};

/// Default timeout applied to every backend request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway that talks to the rating backend over HTTP.
///
/// One instance serves all three backend operations; it is cheap to clone
/// because the underlying reqwest client is reference-counted.
#[derive(Debug, Clone)]
pub struct HttpBackendGateway {
    client: Client,
}

impl HttpBackendGateway {
    /// Creates a gateway whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Configuration`] when the HTTP client cannot
    /// be built.
    pub fn new(timeout: Duration) -> Result<Self, BackendError> {
        let client = build_http_client(timeout)?;
        Ok(Self { client })
    }

    /// Creates a gateway with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Configuration`] when the HTTP client cannot
    /// be built.
    pub fn with_default_timeout() -> Result<Self, BackendError> {
        Self::new(DEFAULT_TIMEOUT)
    }

    /// Rejects non-success statuses, reading the body for error detail.
    async fn check_status(operation: &str, response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(operation, status, &body))
    }

    async fn fetch_responses(
        &self,
        locator: &BackendLocator,
    ) -> Result<Vec<ReviewItem>, BackendError> {
        const OPERATION: &str = "list responses";

        let response = self
            .client
            .get(locator.responses_url())
            .send()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;
        let response = Self::check_status(OPERATION, response).await?;

        let records: Vec<ApiResponseRecord> = response
            .json()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;

        tracing::debug!("loaded {} responses from backend", records.len());
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn post_rating(
        &self,
        locator: &BackendLocator,
        id: &ResponseId,
        verdict: Verdict,
    ) -> Result<(), BackendError> {
        const OPERATION: &str = "rate response";

        let response = self
            .client
            .post(locator.rate_url(id, verdict))
            .send()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;

        // Any success status counts; the response body is ignored.
        Self::check_status(OPERATION, response).await?;
        Ok(())
    }

    async fn post_run_batch(
        &self,
        locator: &BackendLocator,
    ) -> Result<BatchOutcome, BackendError> {
        const OPERATION: &str = "run batch";

        let response = self
            .client
            .post(locator.run_batch_url())
            .send()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;
        let response = Self::check_status(OPERATION, response).await?;

        let report: ApiBatchReport = response
            .json()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;
        Ok(report.into())
    }
}

#[async_trait]
impl ResponseGateway for HttpBackendGateway {
    async fn list_responses(
        &self,
        locator: &BackendLocator,
    ) -> Result<Vec<ReviewItem>, BackendError> {
        self.fetch_responses(locator).await
    }
}

#[async_trait]
impl RatingGateway for HttpBackendGateway {
    async fn submit_rating(
        &self,
        locator: &BackendLocator,
        id: &ResponseId,
        verdict: Verdict,
    ) -> Result<(), BackendError> {
        self.post_rating(locator, id, verdict).await
    }
}

#[async_trait]
impl BatchGateway for HttpBackendGateway {
    async fn run_batch(&self, locator: &BackendLocator) -> Result<BatchOutcome, BackendError> {
        self.post_run_batch(locator).await
    }
}

#[cfg(test)]
mod tests;
