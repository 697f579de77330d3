//! Terminal user interface for walking the review queue.
//!
//! This module provides the interactive frontend for judging responses one
//! at a time, built on the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::RatingApp`]
//! - **View**: Rendering logic in [`app`] and the [`components`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_session`] before starting the program, and
//! `RatingApp::init()` will automatically retrieve the loaded session.
//!
//! # Rating Submission
//!
//! Similarly, [`set_rating_context`] must be called to enable rating
//! submission. This stores the backend locator and gateway used by the
//! async command that posts each judgment.

use std::sync::OnceLock;

use crate::backend::error::BackendError;
use crate::backend::gateway::{HttpBackendGateway, RatingGateway};
use crate::backend::locator::BackendLocator;
use crate::backend::models::{ResponseId, Verdict};
use crate::session::ReviewSession;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::RatingApp;

/// Global storage for the initially loaded session.
///
/// Set before the TUI program starts and read by `RatingApp::init()`.
static INITIAL_SESSION: OnceLock<ReviewSession> = OnceLock::new();

/// Global storage for the rating submission context.
static RATING_CONTEXT: OnceLock<RatingContext> = OnceLock::new();

/// Context required to submit ratings to the backend.
struct RatingContext {
    locator: BackendLocator,
    gateway: HttpBackendGateway,
}

/// Sets the initial session for the TUI application.
///
/// This must be called before starting the bubbletea-rs program; the
/// session is read by `RatingApp::init()` when the program starts.
///
/// Returns `true` if the session was set, `false` if one was already set.
pub fn set_initial_session(session: ReviewSession) -> bool {
    INITIAL_SESSION.set(session).is_ok()
}

/// Sets the rating context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without a
/// context, judgment submissions fail with a configuration error.
///
/// Returns `true` if the context was set, `false` if one was already set.
pub fn set_rating_context(locator: BackendLocator, gateway: HttpBackendGateway) -> bool {
    RATING_CONTEXT
        .set(RatingContext { locator, gateway })
        .is_ok()
}

/// Gets a clone of the initial session from storage.
///
/// Called internally by `RatingApp::init()`. Returns an empty session when
/// no session was stored.
pub(crate) fn get_initial_session() -> ReviewSession {
    INITIAL_SESSION
        .get()
        .cloned()
        .unwrap_or_else(ReviewSession::empty)
}

/// Submits one judgment through the stored rating context.
///
/// Returns an error when the context was not set or the backend call fails.
pub(crate) async fn submit_rating(id: ResponseId, verdict: Verdict) -> Result<(), BackendError> {
    let context = RATING_CONTEXT
        .get()
        .ok_or_else(|| BackendError::Configuration {
            message: "rating context not configured".to_owned(),
        })?;

    context
        .gateway
        .submit_rating(&context.locator, &id, verdict)
        .await
}
