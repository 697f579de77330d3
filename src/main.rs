//! Gavel CLI entrypoint for response review.

use std::io::{self, Write};
use std::process::ExitCode;

use gavel::config::OperationMode;
use gavel::{BackendError, GavelConfig};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BackendError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::RunBatch => cli::batch::run(&config).await,
        OperationMode::Summary => cli::summary::run(&config).await,
        OperationMode::Review => cli::review::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BackendError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GavelConfig, BackendError> {
    GavelConfig::load().map_err(|error| BackendError::Configuration {
        message: error.to_string(),
    })
}
