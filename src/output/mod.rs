//! Output formatting for quickentry.
//!
//! This module provides formatters for displaying parse results in various formats.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::{EntityKind, OutputFormat};
use crate::core::Entity;
use crate::error::QuickEntryError;
use crate::features::nlp::ParseResult;

pub use json::*;
pub use pretty::*;

/// Format a parse result based on output format
///
/// Entity catalogs are used to show names next to resolved ids.
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_parse_result(
    result: &ParseResult,
    contexts: &[Entity],
    projects: &[Entity],
    format: OutputFormat,
) -> Result<String, QuickEntryError> {
    match format {
        OutputFormat::Pretty => Ok(format_parse_result_pretty(result, contexts, projects)),
        OutputFormat::Json => format_parse_result_json(result),
    }
}

/// Format a date resolution based on output format
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_date(
    token: &str,
    today: NaiveDate,
    resolved: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<String, QuickEntryError> {
    match format {
        OutputFormat::Pretty => Ok(format_date_pretty(token, today, resolved)),
        OutputFormat::Json => format_date_json(token, today, resolved),
    }
}

/// Format an entity match based on output format
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_match(
    token: &str,
    kind: EntityKind,
    matched: &Entity,
    format: OutputFormat,
) -> Result<String, QuickEntryError> {
    match format {
        OutputFormat::Pretty => Ok(format_match_pretty(token, kind, matched)),
        OutputFormat::Json => format_match_json(token, kind, matched),
    }
}

/// Format the entity catalogs based on output format
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_entities(
    contexts: &[Entity],
    projects: &[Entity],
    format: OutputFormat,
) -> Result<String, QuickEntryError> {
    match format {
        OutputFormat::Pretty => Ok(format_entities_pretty(contexts, projects)),
        OutputFormat::Json => format_entities_json(contexts, projects),
    }
}
