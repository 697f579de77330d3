//! Client for the response-rating backend.
//!
//! This module provides trait-based gateways for communicating with the
//! backend's REST API. The trait-based design enables mocking in tests while
//! the reqwest implementation handles real HTTP requests.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;

pub use error::BackendError;
pub use gateway::{BatchGateway, HttpBackendGateway, RatingGateway, ResponseGateway};
pub use intake::ReviewIntake;
pub use locator::BackendLocator;
pub use models::{BatchOutcome, RatingStatus, ResponseId, ReviewItem, Verdict};
