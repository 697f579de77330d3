//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use gavel::{BackendError, BatchOutcome};

use super::summary::RatingTally;

/// Writes a rating summary to stdout.
pub fn write_rating_summary(tally: &RatingTally) -> Result<(), BackendError> {
    let mut stdout = io::stdout().lock();
    write_rating_summary_to(&mut stdout, tally)
}

/// Writes a rating summary to the given writer.
pub fn write_rating_summary_to<W: Write>(
    writer: &mut W,
    tally: &RatingTally,
) -> Result<(), BackendError> {
    writeln!(writer, "Responses: {}", tally.total).map_err(|e| io_error(&e))?;
    writeln!(writer, "  unrated:  {}", tally.unrated).map_err(|e| io_error(&e))?;
    writeln!(writer, "  approved: {}", tally.approved).map_err(|e| io_error(&e))?;
    writeln!(writer, "  rejected: {}", tally.rejected).map_err(|e| io_error(&e))?;
    Ok(())
}

/// Writes a batch generation report to stdout.
pub fn write_batch_report(outcome: &BatchOutcome) -> Result<(), BackendError> {
    let mut stdout = io::stdout().lock();
    write_batch_report_to(&mut stdout, outcome)
}

/// Writes a batch generation report to the given writer.
pub fn write_batch_report_to<W: Write>(
    writer: &mut W,
    outcome: &BatchOutcome,
) -> Result<(), BackendError> {
    writeln!(
        writer,
        "Batch {}: {} prompts, {} responses generated",
        outcome.status, outcome.num_prompts, outcome.num_responses
    )
    .map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`BackendError::Io`].
pub(crate) fn io_error(error: &io::Error) -> BackendError {
    BackendError::Io {
        message: error.to_string(),
    }
}
