//! High-level intake facade used by the CLI.

use crate::session::ReviewSession;

use super::error::BackendError;
use super::gateway::ResponseGateway;
use super::locator::BackendLocator;

/// Loads the response collection and builds a review session from it.
pub struct ReviewIntake<'client, Gateway>
where
    Gateway: ResponseGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ReviewIntake<'client, Gateway>
where
    Gateway: ResponseGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetch the full collection and build the session queue.
    ///
    /// When `unrated_only` is set, the queue is restricted to responses with
    /// no recorded rating; order always follows the backend.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including
    /// network problems and malformed payloads.
    pub async fn load_session(
        &self,
        locator: &BackendLocator,
        unrated_only: bool,
    ) -> Result<ReviewSession, BackendError> {
        let items = self.client.list_responses(locator).await?;
        Ok(ReviewSession::new(items, unrated_only))
    }
}
