//! Non-interactive rating summary.
//!
//! Fetches the response collection and prints how many responses are
//! unrated, approved, and rejected, without mutating anything.

use gavel::{
    BackendError, BackendLocator, GavelConfig, HttpBackendGateway, ResponseGateway, ReviewItem,
};

use super::output::write_rating_summary;

/// Counts of responses by rating state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingTally {
    /// Responses in the collection.
    pub total: usize,
    /// Responses with no recorded rating.
    pub unrated: usize,
    /// Responses rated with a positive score.
    pub approved: usize,
    /// Responses rated with a negative score.
    pub rejected: usize,
}

impl RatingTally {
    /// Tallies a response collection by rating state.
    #[must_use]
    pub fn from_items(items: &[ReviewItem]) -> Self {
        let unrated = items.iter().filter(|item| item.is_unrated()).count();
        let approved = items
            .iter()
            .filter(|item| item.rating.is_some_and(|score| score > 0))
            .count();
        let rejected = items
            .iter()
            .filter(|item| item.rating.is_some_and(|score| score < 0))
            .count();
        Self {
            total: items.len(),
            unrated,
            approved,
            rejected,
        }
    }
}

/// Prints a rating summary for the configured backend.
///
/// # Errors
///
/// Returns an error when the backend URL is missing or invalid, or the
/// collection fetch fails.
pub async fn run(config: &GavelConfig) -> Result<(), BackendError> {
    let locator = BackendLocator::parse(config.require_backend_url()?)?;
    let gateway = HttpBackendGateway::new(config.request_timeout())?;

    let items = gateway.list_responses(&locator).await?;
    let tally = RatingTally::from_items(&items);

    write_rating_summary(&tally)
}
