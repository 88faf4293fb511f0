//! Date command implementation.

use crate::cli::args::{DateArgs, OutputFormat};
use crate::core::resolve_date;
use crate::error::QuickEntryError;
use crate::output::format_date;

use super::reference_time;

/// Execute the date command.
///
/// An unrecognized expression is reported in the output, not as an error.
///
/// # Errors
///
/// Returns an error if `--now` is malformed or output formatting fails.
pub fn date(args: &DateArgs, format: OutputFormat) -> Result<String, QuickEntryError> {
    let now = reference_time(args.now.as_deref())?;
    let resolved = resolve_date(&args.token, now);
    format_date(&args.token, now.date(), resolved, format)
}
