//! HTTP client construction for gateway implementations.

use std::time::Duration;

use reqwest::Client;

use crate::backend::error::BackendError;

/// Builds a reqwest client with the given request timeout.
///
/// Every backend call shares the timeout so a hung backend cannot leave the
/// review session waiting forever.
///
/// # Errors
///
/// Returns [`BackendError::Configuration`] when the client cannot be built.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, BackendError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|error| BackendError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}
