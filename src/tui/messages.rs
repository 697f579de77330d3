//! Message types for the TUI update loop.
//!
//! Messages represent user judgments, async rating-request results, and
//! system events fed into the application's update function.

/// Messages for the response review TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Judgments
    /// Approve the current response (+1) and move to the next.
    Approve,
    /// Reject the current response (-1) and move to the next.
    Reject,
    /// Move to the next response without contacting the backend.
    Skip,

    // Rating request results
    /// A rating request finished; `failure` carries the error message when
    /// the backend rejected or never received the judgment.
    RatingSettled {
        /// Error message when the submission failed, `None` on success.
        failure: Option<String>,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Whether this message is one of the three judgment triggers.
    #[must_use]
    pub(crate) const fn is_judgment(&self) -> bool {
        matches!(self, Self::Approve | Self::Reject | Self::Skip)
    }
}
