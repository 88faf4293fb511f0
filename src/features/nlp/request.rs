//! Mapping from a parsed line to a task-creation request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ParseResult;

/// Fields handed to the task store when a quick-entry line is submitted.
///
/// Only resolved values are carried; raw token text stays on the
/// [`ParseResult`] for feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl From<&ParseResult> for CreateTaskRequest {
    fn from(parsed: &ParseResult) -> Self {
        Self {
            title: parsed.title.clone(),
            context_id: parsed.context_id.clone(),
            project_id: parsed.project_id.clone(),
            when_date: parsed.when_date,
            deadline: parsed.deadline,
        }
    }
}

impl From<ParseResult> for CreateTaskRequest {
    fn from(parsed: ParseResult) -> Self {
        Self {
            title: parsed.title,
            context_id: parsed.context_id,
            project_id: parsed.project_id,
            when_date: parsed.when_date,
            deadline: parsed.deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::RawTokens;

    #[test]
    fn test_request_from_parse_result() {
        let parsed = ParseResult {
            title: "Task".to_string(),
            context_id: Some("ctx-1".to_string()),
            project_id: None,
            when_date: NaiveDate::from_ymd_opt(2026, 2, 21),
            deadline: None,
            raw: RawTokens {
                context: Some("Work".to_string()),
                project: Some("Garden".to_string()),
                when_date: Some("tomorrow".to_string()),
                deadline: Some("never".to_string()),
            },
        };

        let request = CreateTaskRequest::from(&parsed);
        assert_eq!(request.title, "Task");
        assert_eq!(request.context_id.as_deref(), Some("ctx-1"));
        assert!(request.project_id.is_none());
        assert_eq!(request.when_date, NaiveDate::from_ymd_opt(2026, 2, 21));
        assert!(request.deadline.is_none());

        assert_eq!(CreateTaskRequest::from(parsed), request);
    }

    #[test]
    fn test_request_json_omits_unresolved() {
        let request = CreateTaskRequest {
            title: "Task".to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 2, 27),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "title": "Task", "deadline": "2026-02-27" })
        );
    }
}
