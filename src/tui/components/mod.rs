//! Reusable UI components for the review TUI.
//!
//! - [`review_card`]: renders the current response with its prompt, answer,
//!   and rating status
//! - [`text_wrap`]: word wrapping for prose fields
//! - [`text_truncate`]: height and display-width truncation helpers

pub mod review_card;
pub mod text_truncate;
pub mod text_wrap;

pub use review_card::{ReviewCardComponent, ReviewCardViewContext};
