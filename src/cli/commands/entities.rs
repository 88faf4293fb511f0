//! Entity catalog commands: `match` and `entities`.

use crate::cli::args::{EntityKind, MatchArgs, OutputFormat};
use crate::config::Config;
use crate::core::find_entity;
use crate::error::QuickEntryError;
use crate::output::{format_entities, format_match};

/// Execute the match command.
///
/// # Errors
///
/// Returns `QuickEntryError::NotFound` when no entity matches, in either
/// output format, or an error if output formatting fails.
pub fn match_entity(
    config: &Config,
    args: &MatchArgs,
    format: OutputFormat,
) -> Result<String, QuickEntryError> {
    let entities = match args.kind {
        EntityKind::Context => config.context_entities(),
        EntityKind::Project => config.project_entities(),
    };

    let matched = find_entity(&args.token, &entities).ok_or_else(|| {
        QuickEntryError::NotFound(format!("no {} matches '{}'", args.kind, args.token))
    })?;

    format_match(&args.token, args.kind, matched, format)
}

/// Execute the entities command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn entities(config: &Config, format: OutputFormat) -> Result<String, QuickEntryError> {
    format_entities(&config.context_entities(), &config.project_entities(), format)
}
