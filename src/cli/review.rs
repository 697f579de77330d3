//! TUI mode for judging responses.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that walks the review queue one response at a time.

use std::io::{self, Write};

use bubbletea_rs::Program;

use gavel::tui::{RatingApp, set_initial_session, set_rating_context};
use gavel::{BackendError, BackendLocator, GavelConfig, HttpBackendGateway, ReviewIntake};

/// Runs the interactive review mode.
///
/// The collection is fetched and the queue is built before the TUI starts,
/// so a load failure surfaces as a CLI error instead of a stuck session.
/// An empty queue still starts the TUI, which shows the empty state with
/// controls disabled.
///
/// # Errors
///
/// Returns an error if:
/// - The backend URL is missing or invalid
/// - The collection fetch fails or returns malformed data
/// - The TUI fails to initialise
pub async fn run(config: &GavelConfig) -> Result<(), BackendError> {
    let locator = BackendLocator::parse(config.require_backend_url()?)?;
    let gateway = HttpBackendGateway::new(config.request_timeout())?;

    let intake = ReviewIntake::new(&gateway);
    let session = intake
        .load_session(&locator, config.unrated_only())
        .await?;

    tracing::debug!(
        "starting review session: {} queued of {} responses",
        session.queue_len(),
        session.total_len()
    );

    // Store the session in global state for Model::init() to retrieve.
    // If already set (e.g. re-running the TUI in the same process), this is
    // a no-op and the existing data remains.
    let _ = set_initial_session(session);

    // Same semantics for the rating context: if already set, keep it.
    let _ = set_rating_context(locator, gateway);

    run_tui().await.map_err(|error| BackendError::Io {
        message: format!("TUI error: {error}"),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `RatingApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // RatingApp::init() retrieves the session from module-level storage.
    let program = Program::<RatingApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
