//! Error types exposed by the backend client layer.

use thiserror::Error;

/// Errors surfaced while parsing input or communicating with the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The CLI did not include a backend URL.
    #[error("backend URL is required")]
    MissingBackendUrl,

    /// The provided backend URL could not be parsed.
    #[error("backend URL is invalid: {0}")]
    InvalidUrl(String),

    /// The backend returned a non-success HTTP status.
    #[error("backend API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend returned a body that could not be decoded.
    #[error("backend returned malformed data: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
