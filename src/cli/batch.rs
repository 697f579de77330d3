//! Batch generation trigger.

use gavel::{BackendError, BackendLocator, BatchGateway, GavelConfig, HttpBackendGateway};

use super::output::write_batch_report;

/// Asks the backend to generate a fresh batch of responses and prints the
/// reported counts.
///
/// # Errors
///
/// Returns an error when the backend URL is missing or invalid, or the
/// batch trigger fails.
pub async fn run(config: &GavelConfig) -> Result<(), BackendError> {
    let locator = BackendLocator::parse(config.require_backend_url()?)?;
    let gateway = HttpBackendGateway::new(config.request_timeout())?;

    let outcome = gateway.run_batch(&locator).await?;

    write_batch_report(&outcome)
}
