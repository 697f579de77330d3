//! Review session state machine.
//!
//! A [`ReviewSession`] owns the response collection fetched at startup and a
//! working queue of indices into it, walked front to back by a single
//! cursor. The queue is computed once at construction and never re-filtered:
//! a response stays reachable at its queue slot even if its rating changes
//! mid-session.
//!
//! The cursor only ever moves forward. Once it passes the end of the queue
//! the session is terminal and stays terminal; resuming requires a fresh
//! fetch and a new session.

use crate::backend::models::ReviewItem;

/// Lifecycle state of a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A current response is displayed and awaiting judgment.
    Reviewing,
    /// Every queued response has been judged or skipped. Terminal.
    Done,
    /// The queue was empty at construction. Terminal.
    Empty,
}

impl SessionPhase {
    /// Whether no further review is possible in this session.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Empty)
    }
}

/// Owned session state for one pass over the review queue.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    /// Full collection as returned by the backend. Never mutated.
    items: Vec<ReviewItem>,
    /// Indices into `items`, in backend order. Fixed after construction.
    queue: Vec<usize>,
    /// Cursor into `queue`. Monotonically non-decreasing.
    position: usize,
}

impl ReviewSession {
    /// Builds a session over the given collection.
    ///
    /// When `unrated_only` is set the queue holds only responses with no
    /// recorded rating, preserving their relative order; otherwise the queue
    /// covers the whole collection.
    #[must_use]
    pub fn new(items: Vec<ReviewItem>, unrated_only: bool) -> Self {
        let queue = if unrated_only {
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.is_unrated())
                .map(|(index, _)| index)
                .collect()
        } else {
            (0..items.len()).collect()
        };
        Self {
            items,
            queue,
            position: 0,
        }
    }

    /// Builds a session with no items (for initial loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), false)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.queue.is_empty() {
            SessionPhase::Empty
        } else if self.position >= self.queue.len() {
            SessionPhase::Done
        } else {
            SessionPhase::Reviewing
        }
    }

    /// Whether the session has reached a terminal phase.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase().is_terminal()
    }

    /// The response under the cursor, if the session is still reviewing.
    #[must_use]
    pub fn current(&self) -> Option<&ReviewItem> {
        self.queue
            .get(self.position)
            .and_then(|&index| self.items.get(index))
    }

    /// Moves the cursor forward by one and reports the resulting phase.
    ///
    /// A no-op once the session is terminal, so the cursor never exceeds the
    /// queue length.
    pub fn advance(&mut self) -> SessionPhase {
        if self.position < self.queue.len() {
            self.position += 1;
        }
        self.phase()
    }

    /// Zero-based cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of responses in the working queue.
    #[must_use]
    pub const fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Number of responses in the full collection.
    #[must_use]
    pub const fn total_len(&self) -> usize {
        self.items.len()
    }

    /// Number of responses in the collection with no recorded rating.
    ///
    /// Reflects the ratings known at fetch time; judgments recorded during
    /// the session do not change it.
    #[must_use]
    pub fn unrated_len(&self) -> usize {
        self.items.iter().filter(|item| item.is_unrated()).count()
    }

    /// One-based position for the `current / total` counter.
    ///
    /// Reads `0` for an empty queue and sticks at the queue length once the
    /// session is done, matching the display convention of the counter.
    #[must_use]
    pub fn display_position(&self) -> usize {
        if self.queue.is_empty() {
            0
        } else {
            (self.position + 1).min(self.queue.len())
        }
    }
}
