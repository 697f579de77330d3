//! Rendering logic for the review TUI application.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! read state without modification.

use crate::session::SessionPhase;

use super::RatingApp;

impl RatingApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Gavel - Response Review";
        let submitting_indicator = if self.in_flight {
            " [Submitting...]"
        } else {
            ""
        };
        format!("{title}{submitting_indicator}\n")
    }

    /// Renders the counts bar with the unrated indicator and the cursor
    /// counter.
    pub(super) fn render_counts_bar(&self) -> String {
        format!(
            "unrated: {}    {} / {}\n",
            self.session.unrated_len(),
            self.session.display_position(),
            self.session.queue_len()
        )
    }

    /// Renders the status bar with the error notice or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        let hints = match self.phase() {
            SessionPhase::Reviewing => "Up:good  Left:bad  Right:skip  ?:help  q:quit",
            SessionPhase::Done | SessionPhase::Empty => "?:help  q:quit",
        };
        format!("{hints}\n")
    }

    /// Renders the empty-queue view shown in place of the review card.
    pub(super) fn render_empty_view(&self) -> String {
        "\nNothing to review - every response already has a rating.\n".to_owned()
    }

    /// Renders the completion view once the queue is exhausted.
    pub(super) fn render_done_view(&self) -> String {
        "\nAll done. Thank you!\n".to_owned()
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Judging:
  Up         Approve the response (+1)
  Left       Reject the response (-1)
  Right      Skip without rating

Other:
  ?          Toggle this help
  q          Quit

Press ? again to close this help.
";
        help_text.to_owned()
    }
}
