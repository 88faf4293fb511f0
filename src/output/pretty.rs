use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::EntityKind;
use crate::core::{to_iso_date, Entity};
use crate::features::nlp::{ParseResult, TokenKind};

/// Name and id for a resolved entity, or just the id if it is no longer listed.
fn describe_entity(id: &str, entities: &[Entity]) -> String {
    entities
        .iter()
        .find(|e| e.id == id)
        .map_or_else(|| id.to_string(), |e| format!("{} {}", e.name, format!("({id})").dimmed()))
}

/// Format a parse result as pretty output
pub fn format_parse_result_pretty(
    result: &ParseResult,
    contexts: &[Entity],
    projects: &[Entity],
) -> String {
    let mut output = format!("{}\n", "Parsed Task".yellow().bold());

    let title = if result.title.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        result.title.clone()
    };
    writeln!(output, "  {} {title}", "Title:".cyan().bold()).ok();

    if let Some(id) = &result.context_id {
        writeln!(output, "  {} {}", "Context:".blue(), describe_entity(id, contexts)).ok();
    }
    if let Some(id) = &result.project_id {
        writeln!(output, "  {} {}", "Project:".magenta(), describe_entity(id, projects)).ok();
    }
    if let Some(when) = result.when_date_iso() {
        writeln!(output, "  {} {when}", "When:".cyan()).ok();
    }
    if let Some(deadline) = result.deadline_iso() {
        writeln!(output, "  {} {deadline}", "Deadline:".red()).ok();
    }

    for kind in result.unresolved() {
        let raw = result.raw.get(kind).unwrap_or_default();
        writeln!(
            output,
            "  {} {}{raw} {}",
            "Unrecognized:".red().bold(),
            kind.prefix(),
            format!("({kind})").dimmed()
        )
        .ok();
    }

    output
}

/// Format a date resolution as pretty output
pub fn format_date_pretty(token: &str, today: NaiveDate, resolved: Option<NaiveDate>) -> String {
    match resolved {
        Some(date) => format!(
            "{} {} {}",
            token.bold(),
            "→".dimmed(),
            format!("{} ({})", to_iso_date(date), date.format("%A")).green()
        ),
        None => format!(
            "{} {} {}",
            token.bold(),
            "→".dimmed(),
            format!("not recognized (relative to {})", to_iso_date(today)).red()
        ),
    }
}

/// Format an entity match as pretty output
pub fn format_match_pretty(token: &str, kind: EntityKind, matched: &Entity) -> String {
    let prefix = match kind {
        EntityKind::Context => TokenKind::Context.prefix(),
        EntityKind::Project => TokenKind::Project.prefix(),
    };
    format!(
        "{}{} {} {} {}",
        prefix,
        token.bold(),
        "→".dimmed(),
        matched.name.green(),
        format!("({})", matched.id).dimmed()
    )
}

/// Format the entity catalogs as pretty output
pub fn format_entities_pretty(contexts: &[Entity], projects: &[Entity]) -> String {
    let mut output = String::new();

    for (heading, prefix, entities) in [
        ("Contexts", TokenKind::Context.prefix(), contexts),
        ("Projects", TokenKind::Project.prefix(), projects),
    ] {
        writeln!(output, "{} ({} items)", heading.bold(), entities.len()).ok();
        if entities.is_empty() {
            writeln!(output, "  {}", "No items".dimmed()).ok();
        }
        for entity in entities {
            writeln!(output, "  {prefix}{}  {}", entity.name, entity.id.dimmed()).ok();
        }
    }

    output
}
