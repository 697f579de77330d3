//! Gavel library crate for reviewing model-generated responses.
//!
//! The library wraps a small REST backend that stores model responses and
//! their human ratings. It parses and validates the backend URL, fetches the
//! response collection, walks a review session through the unrated queue,
//! and submits judgments, surfacing friendly errors that can be displayed in
//! the CLI and the TUI.

pub mod backend;
pub mod config;
pub mod session;
pub mod tui;

pub use backend::{
    BackendError, BackendLocator, BatchGateway, BatchOutcome, HttpBackendGateway, RatingGateway,
    RatingStatus, ResponseGateway, ResponseId, ReviewIntake, ReviewItem, Verdict,
};
pub use config::{GavelConfig, OperationMode};
pub use session::{ReviewSession, SessionPhase};
