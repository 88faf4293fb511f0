//! Parse command implementation.
//!
//! This module implements `quickentry parse` for quick-entry task lines.

use tracing::debug;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::QuickEntryError;
use crate::features::nlp::parse_task_input;
use crate::output::format_parse_result;

use super::reference_time;

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if `--now` is malformed or output formatting fails.
pub fn parse(
    config: &Config,
    args: &ParseArgs,
    format: OutputFormat,
) -> Result<String, QuickEntryError> {
    let now = reference_time(args.now.as_deref())?;
    let contexts = config.context_entities();
    let projects = config.project_entities();

    let result = parse_task_input(&args.text, &contexts, &projects, now);
    debug!(
        title = result.title.as_str(),
        unresolved = result.unresolved().len(),
        "parsed task input"
    );

    format_parse_result(&result, &contexts, &projects, format)
}
