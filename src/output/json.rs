//! JSON output formatting for quickentry.

use chrono::NaiveDate;
use serde_json::json;

use crate::cli::args::EntityKind;
use crate::core::{to_iso_date, Entity};
use crate::error::QuickEntryError;
use crate::features::nlp::{CreateTaskRequest, ParseResult};

/// Format a parse result as JSON
///
/// Carries the result itself, the unresolved token kinds and the create
/// request the result maps onto.
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_parse_result_json(result: &ParseResult) -> Result<String, QuickEntryError> {
    let output = json!({
        "parsed": result,
        "unresolved": result.unresolved(),
        "request": CreateTaskRequest::from(result),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a date resolution as JSON
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_date_json(
    token: &str,
    today: NaiveDate,
    resolved: Option<NaiveDate>,
) -> Result<String, QuickEntryError> {
    let output = json!({
        "token": token,
        "reference": to_iso_date(today),
        "date": resolved.map(to_iso_date),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format an entity match as JSON
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_match_json(
    token: &str,
    kind: EntityKind,
    matched: &Entity,
) -> Result<String, QuickEntryError> {
    let output = json!({
        "token": token,
        "kind": kind.to_string(),
        "match": matched,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the entity catalogs as JSON
///
/// # Errors
///
/// Returns `QuickEntryError::Json` if JSON serialization fails.
pub fn format_entities_json(
    contexts: &[Entity],
    projects: &[Entity],
) -> Result<String, QuickEntryError> {
    let output = json!({
        "contexts": contexts,
        "projects": projects,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::RawTokens;

    #[test]
    fn test_parse_result_json() {
        let result = ParseResult {
            title: "Task".to_string(),
            context_id: Some("ctx-1".to_string()),
            raw: RawTokens {
                context: Some("Work".to_string()),
                project: Some("Garden".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let output = format_parse_result_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["parsed"]["title"], "Task");
        assert_eq!(value["parsed"]["contextId"], "ctx-1");
        assert_eq!(value["parsed"]["raw"]["project"], "Garden");
        assert_eq!(value["unresolved"], json!(["project"]));
        assert_eq!(value["request"], json!({ "title": "Task", "contextId": "ctx-1" }));
    }

    #[test]
    fn test_date_json() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
        let output = format_date_json("tom", today, today.succ_opt()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2026-02-21");
        assert_eq!(value["reference"], "2026-02-20");

        let output = format_date_json("nope", today, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["date"].is_null());
    }

    #[test]
    fn test_match_json() {
        let work = Entity::new("ctx-1", "Work");
        let output = format_match_json("wo", EntityKind::Context, &work).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["match"]["id"], "ctx-1");
        assert_eq!(value["kind"], "context");
    }
}
