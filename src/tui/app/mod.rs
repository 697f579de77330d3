//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! response review TUI. It owns the review session, the in-flight request
//! flag that serialises judgments, and the error notice.
//!
//! # Module Structure
//!
//! - `judgment_handlers`: approve / reject / skip handling and the async
//!   rating command
//! - `rendering`: view rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::backend::models::ReviewItem;
use crate::session::{ReviewSession, SessionPhase};

use super::components::ReviewCardComponent;
use super::input::map_key_to_message;
use super::messages::AppMsg;

mod judgment_handlers;
mod rendering;

/// Main application model for the response review TUI.
#[derive(Debug)]
pub struct RatingApp {
    /// The review session being walked.
    pub(crate) session: ReviewSession,
    /// Whether a rating request is currently pending.
    ///
    /// While set, all three judgment triggers are ignored, so at most one
    /// backend call is ever in flight.
    pub(crate) in_flight: bool,
    /// Current error notice, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Review card component.
    card: ReviewCardComponent,
}

impl RatingApp {
    /// Creates a new application over the given session.
    #[must_use]
    pub const fn new(session: ReviewSession) -> Self {
        Self {
            session,
            in_flight: false,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            card: ReviewCardComponent::new(),
        }
    }

    /// Creates an application with an empty session.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ReviewSession::empty())
    }

    /// Current lifecycle phase of the underlying session.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    /// The response currently awaiting judgment, if any.
    #[must_use]
    pub fn current_item(&self) -> Option<&ReviewItem> {
        self.session.current()
    }

    /// Whether a rating request is pending.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The current error notice, if any.
    #[must_use]
    pub fn error_notice(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the judgment triggers are currently ignored.
    ///
    /// Controls lock while a rating request is pending and permanently once
    /// the session is terminal.
    pub(crate) fn controls_locked(&self) -> bool {
        self.in_flight || self.session.is_terminal()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function; it delegates to specialised
    /// handlers per message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_judgment() {
            return self.handle_judgment_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle, settle, and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RatingSettled { failure } => self.handle_rating_settled(failure.as_deref()),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(false, "judgment message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        None
    }
}

impl Model for RatingApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the session loaded before the program started.
        let session = super::get_initial_session();
        (Self::new(session), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render the overlay instead
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_counts_bar());
        output.push('\n');

        // Layout: header (1) + counts bar (1) + newline (1) + body + status bar (1)
        let chrome_height = 4_usize;
        let body_height = (self.height as usize).saturating_sub(chrome_height);

        match self.phase() {
            SessionPhase::Empty => output.push_str(&self.render_empty_view()),
            SessionPhase::Done => output.push_str(&self.render_done_view()),
            SessionPhase::Reviewing => {
                let ctx = super::components::ReviewCardViewContext {
                    item: self.session.current(),
                    max_width: 80.min(self.width as usize),
                    max_height: body_height,
                };
                output.push_str(&self.card.view(&ctx));
            }
        }

        output.push('\n');
        output.push_str(&self.render_status_bar());

        output
    }
}
