//! Judgment handlers for the review TUI.
//!
//! This module contains the message handlers for the three judgment
//! triggers and for the completion of the async rating request. Approve and
//! reject submit a rating before advancing; skip advances directly without
//! contacting the backend.

use std::any::Any;

use bubbletea_rs::Cmd;

use crate::backend::models::Verdict;
use crate::tui::messages::AppMsg;

use super::RatingApp;

impl RatingApp {
    /// Dispatches judgment messages to their handlers.
    pub(super) fn handle_judgment_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Approve => self.handle_verdict(Verdict::Approve),
            AppMsg::Reject => self.handle_verdict(Verdict::Reject),
            AppMsg::Skip => self.handle_skip(),
            _ => {
                debug_assert!(false, "non-judgment message routed to handle_judgment_msg");
                None
            }
        }
    }

    /// Starts a rating request for the current response.
    ///
    /// Locks the judgment triggers for the duration of the request and
    /// returns the command that performs the POST. The cursor does not move
    /// until the request settles.
    fn handle_verdict(&mut self, verdict: Verdict) -> Option<Cmd> {
        if self.controls_locked() {
            return None;
        }
        let id = self.session.current()?.id.clone();

        self.in_flight = true;
        self.error = None;

        Some(Box::pin(async move {
            let failure = crate::tui::submit_rating(id, verdict)
                .await
                .err()
                .map(|error| error.to_string());
            Some(Box::new(AppMsg::RatingSettled { failure }) as Box<dyn Any + Send>)
        }))
    }

    /// Handles completion of a rating request.
    ///
    /// The cursor advances regardless of the request outcome; a failure
    /// only raises the error notice.
    pub(super) fn handle_rating_settled(&mut self, failure: Option<&str>) -> Option<Cmd> {
        if let Some(message) = failure {
            tracing::warn!("rating submission failed: {message}");
        }
        self.error = failure.map(ToOwned::to_owned);
        self.in_flight = false;
        self.session.advance();
        None
    }

    /// Advances past the current response without rating it.
    pub(super) fn handle_skip(&mut self) -> Option<Cmd> {
        if self.controls_locked() {
            return None;
        }
        self.session.advance();
        None
    }
}
