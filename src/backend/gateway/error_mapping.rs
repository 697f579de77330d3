//! Mapping from transport and HTTP status failures to [`BackendError`].

use reqwest::StatusCode;

use crate::backend::error::BackendError;

/// Maps a reqwest error to a [`BackendError`].
///
/// Decode failures (malformed JSON bodies) are distinguished from transport
/// failures so callers can tell "backend unreachable" from "backend spoke
/// gibberish".
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> BackendError {
    if error.is_decode() {
        BackendError::Decode {
            message: format!("{operation} failed: {error}"),
        }
    } else {
        BackendError::Network {
            message: format!("{operation} failed: {error}"),
        }
    }
}

/// Maps a non-success HTTP status to a [`BackendError::Api`].
///
/// The backend reports failures as JSON with a `detail` field; when present
/// it replaces the raw body in the error message.
pub(super) fn map_status_error(operation: &str, status: StatusCode, body: &str) -> BackendError {
    let detail = extract_backend_detail(body)
        .unwrap_or_else(|| body.trim().to_owned());

    let message = if detail.is_empty() {
        format!("{operation} failed with status {status}")
    } else {
        format!("{operation} failed with status {status}: {detail}")
    };

    BackendError::Api { message }
}

/// Extracts the `detail` message from a backend error body.
fn extract_backend_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
