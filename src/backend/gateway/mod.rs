//! Gateways for talking to the rating backend over HTTP.
//!
//! This module provides trait-based gateways for the three backend
//! operations gavel consumes. The traits enable mocking in tests while
//! [`HttpBackendGateway`] handles real HTTP requests through reqwest.

mod client;
mod error_mapping;
mod http;

pub use http::HttpBackendGateway;

use async_trait::async_trait;

use crate::backend::error::BackendError;
use crate::backend::locator::BackendLocator;
use crate::backend::models::{BatchOutcome, ResponseId, ReviewItem, Verdict};

/// Gateway that can load the response collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseGateway: Send + Sync {
    /// Fetch all responses known to the backend.
    async fn list_responses(
        &self,
        locator: &BackendLocator,
    ) -> Result<Vec<ReviewItem>, BackendError>;
}

/// Gateway that can record a judgment for one response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingGateway: Send + Sync {
    /// Submit a verdict for the response with the given identifier.
    async fn submit_rating(
        &self,
        locator: &BackendLocator,
        id: &ResponseId,
        verdict: Verdict,
    ) -> Result<(), BackendError>;
}

/// Gateway that can trigger backend batch generation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BatchGateway: Send + Sync {
    /// Ask the backend to generate a fresh batch of responses.
    async fn run_batch(&self, locator: &BackendLocator) -> Result<BatchOutcome, BackendError>;
}
