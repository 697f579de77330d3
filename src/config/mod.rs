//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.gavel.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GAVEL_BACKEND_URL` and friends
//! 4. **Command-line arguments** – `--backend-url`/`-b` and friends
//!
//! # Configuration File
//!
//! Place `.gavel.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! backend_url = "http://localhost:8000"
//! all_responses = false
//! timeout_seconds = 10
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive TUI for judging responses one at a time.
    Review,
    /// Print a non-interactive rating summary and exit.
    Summary,
    /// Trigger backend batch generation and exit.
    RunBatch,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `GAVEL_BACKEND_URL` or `--backend-url`: Rating backend base URL
/// - `GAVEL_TIMEOUT_SECONDS` or `--timeout-seconds`: HTTP request timeout
///
/// # Example
///
/// ```no_run
/// use gavel::GavelConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GavelConfig::load().expect("failed to load configuration");
/// let backend_url = config.require_backend_url().expect("backend URL required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GAVEL",
    discovery(
        dotfile_name = ".gavel.toml",
        config_file_name = "gavel.toml",
        app_name = "gavel"
    )
)]
pub struct GavelConfig {
    /// Base URL of the rating backend.
    ///
    /// Can be provided via:
    /// - CLI: `--backend-url <URL>` or `-b <URL>`
    /// - Environment: `GAVEL_BACKEND_URL`
    /// - Config file: `backend_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub backend_url: Option<String>,

    /// Includes already-rated responses in the review queue.
    ///
    /// By default the queue holds only responses with no recorded rating.
    ///
    /// Can be provided via:
    /// - CLI: `--all-responses` / `-a`
    /// - Config file: `all_responses = true`
    ///
    /// Note: Environment variable `GAVEL_ALL_RESPONSES` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 'a')]
    pub all_responses: bool,

    /// Prints a rating summary instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    #[ortho_config(cli_short = 's')]
    pub summary: bool,

    /// Triggers backend batch generation and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--run-batch`
    /// - Config file: `run_batch = true`
    #[ortho_config()]
    pub run_batch: bool,

    /// Timeout applied to every backend request, in seconds.
    ///
    /// Can be provided via:
    /// - CLI: `--timeout-seconds <SECS>`
    /// - Environment: `GAVEL_TIMEOUT_SECONDS`
    /// - Config file: `timeout_seconds = 10`
    #[ortho_config()]
    pub timeout_seconds: u64,
}

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

impl Default for GavelConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            all_responses: false,
            summary: false,
            run_batch: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl GavelConfig {
    /// Returns the backend URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::MissingBackendUrl`] when no URL is
    /// configured.
    pub fn require_backend_url(&self) -> Result<&str, BackendError> {
        self.backend_url
            .as_deref()
            .ok_or(BackendError::MissingBackendUrl)
    }

    /// Whether the review queue is restricted to unrated responses.
    #[must_use]
    pub const fn unrated_only(&self) -> bool {
        !self.all_responses
    }

    /// HTTP timeout for backend requests.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `RunBatch` when batch generation is requested, `Summary`
    /// when a summary listing is requested, and `Review` otherwise. Batch
    /// generation wins over the summary flag so a stale `summary` entry in
    /// a config file cannot mask an explicit `--run-batch`.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.run_batch {
            OperationMode::RunBatch
        } else if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Review
        }
    }
}
