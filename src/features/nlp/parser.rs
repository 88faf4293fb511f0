//! Quick-entry task parser.
//!
//! Parses a line like "Call Bob #Work +Website do:tomorrow due:mar 15" into a
//! title plus resolved context, project and date fields.

use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{match_entity, resolve_date, to_iso_date, Named};

/// The four kinds of inline token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `#name`
    Context,
    /// `+name`
    Project,
    /// `do:date`
    When,
    /// `due:date`
    Deadline,
}

impl TokenKind {
    /// Every kind, in the order fields are reported.
    pub const ALL: [Self; 4] = [Self::Context, Self::Project, Self::When, Self::Deadline];

    /// The marker that introduces this token in the input line.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Context => "#",
            Self::Project => "+",
            Self::When => "do:",
            Self::Deadline => "due:",
        }
    }

    /// Whether the token value is a date expression.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::When | Self::Deadline)
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_lowercase().as_str() {
            "#" => Some(Self::Context),
            "+" => Some(Self::Project),
            "do:" => Some(Self::When),
            "due:" => Some(Self::Deadline),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Context => "context",
            Self::Project => "project",
            Self::When => "when",
            Self::Deadline => "deadline",
        })
    }
}

/// Token text as typed, without the prefix.
///
/// Populated whenever a token kind appears in the input, whether or not it
/// resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl RawTokens {
    /// Raw text captured for a token kind.
    #[must_use]
    pub fn get(&self, kind: TokenKind) -> Option<&str> {
        match kind {
            TokenKind::Context => self.context.as_deref(),
            TokenKind::Project => self.project.as_deref(),
            TokenKind::When => self.when_date.as_deref(),
            TokenKind::Deadline => self.deadline.as_deref(),
        }
    }

    /// Whether no token was found at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.context.is_none()
            && self.project.is_none()
            && self.when_date.is_none()
            && self.deadline.is_none()
    }
}

/// Result of parsing a quick-entry line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// The input with all extracted tokens removed and whitespace normalized.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub raw: RawTokens,
}

impl ParseResult {
    /// Whether a token kind resolved to a value.
    #[must_use]
    pub const fn is_resolved(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Context => self.context_id.is_some(),
            TokenKind::Project => self.project_id.is_some(),
            TokenKind::When => self.when_date.is_some(),
            TokenKind::Deadline => self.deadline.is_some(),
        }
    }

    /// Token kinds that were typed but could not be resolved.
    #[must_use]
    pub fn unresolved(&self) -> Vec<TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(|&kind| self.raw.get(kind).is_some() && !self.is_resolved(kind))
            .collect()
    }

    /// Check if this task has any date set.
    #[must_use]
    pub const fn has_schedule(&self) -> bool {
        self.when_date.is_some() || self.deadline.is_some()
    }

    /// Get the when date as an ISO string.
    #[must_use]
    pub fn when_date_iso(&self) -> Option<String> {
        self.when_date.map(to_iso_date)
    }

    /// Get the deadline as an ISO string.
    #[must_use]
    pub fn deadline_iso(&self) -> Option<String> {
        self.deadline.map(to_iso_date)
    }
}

/// A token located in the input line.
#[derive(Debug)]
struct Token {
    kind: TokenKind,
    /// Text as typed after the prefix.
    value: String,
    /// Resolved date for `do:`/`due:` tokens.
    date: Option<NaiveDate>,
    /// Byte range of prefix plus value.
    span: Range<usize>,
}

// A prefix at start-of-line or after whitespace, then a non-whitespace run
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(#|\+|(?i:do:|due:))(\S+)")
        .unwrap_or_else(|e| panic!("Invalid token regex: {e}"))
});

static NEXT_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+(\S+)").unwrap_or_else(|e| panic!("Invalid next word regex: {e}"))
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s{2,}").unwrap_or_else(|e| panic!("Invalid whitespace regex: {e}"))
});

/// Parse a quick-entry line into task fields.
///
/// `#name` and `+name` resolve against `contexts` and `projects` by fuzzy
/// name match; `do:date` and `due:date` resolve relative to `now`. A token
/// counts only at the start of the line or after whitespace, and only the
/// first token of each kind is extracted. Unresolved tokens keep their text
/// in [`ParseResult::raw`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quickentry::core::Entity;
/// use quickentry::features::nlp::parse_task_input;
///
/// let contexts = vec![Entity::new("ctx-1", "Work"), Entity::new("ctx-2", "Personal")];
/// let projects = vec![Entity::new("proj-1", "Cortex"), Entity::new("proj-2", "Website")];
/// let now = NaiveDate::from_ymd_opt(2026, 2, 20)
///     .and_then(|d| d.and_hms_opt(9, 0, 0))
///     .unwrap();
///
/// let task = parse_task_input("Task #Work +Cortex do:tomorrow due:friday", &contexts, &projects, now);
/// assert_eq!(task.title, "Task");
/// assert_eq!(task.context_id.as_deref(), Some("ctx-1"));
/// assert_eq!(task.project_id.as_deref(), Some("proj-1"));
/// assert_eq!(task.when_date_iso().as_deref(), Some("2026-02-21"));
/// assert_eq!(task.deadline_iso().as_deref(), Some("2026-02-27"));
///
/// let task = parse_task_input("Task #gym", &contexts, &projects, now);
/// assert!(task.context_id.is_none());
/// assert_eq!(task.raw.context.as_deref(), Some("gym"));
/// ```
#[must_use]
pub fn parse_task_input<C: Named, P: Named>(
    input: &str,
    contexts: &[C],
    projects: &[P],
    now: NaiveDateTime,
) -> ParseResult {
    if input.trim().is_empty() {
        return ParseResult::default();
    }

    let tokens = scan_tokens(input, now);
    let mut result = ParseResult {
        title: strip_tokens(input, &tokens),
        ..ParseResult::default()
    };

    for token in tokens {
        match token.kind {
            TokenKind::Context => {
                result.context_id = match_entity(&token.value, contexts).map(str::to_string);
                result.raw.context = Some(token.value);
            },
            TokenKind::Project => {
                result.project_id = match_entity(&token.value, projects).map(str::to_string);
                result.raw.project = Some(token.value);
            },
            TokenKind::When => {
                result.when_date = token.date;
                result.raw.when_date = Some(token.value);
            },
            TokenKind::Deadline => {
                result.deadline = token.date;
                result.raw.deadline = Some(token.value);
            },
        }
    }

    for kind in result.unresolved() {
        debug!(
            %kind,
            raw = result.raw.get(kind).unwrap_or_default(),
            "token not recognized"
        );
    }

    result
}

/// Locate the first token of each kind.
fn scan_tokens(input: &str, now: NaiveDateTime) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(TokenKind::ALL.len());
    let mut claimed_end = 0;

    for caps in TOKEN_PATTERN.captures_iter(input) {
        let (Some(prefix), Some(run)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        // Inside a two-word date already taken
        if prefix.start() < claimed_end {
            continue;
        }
        let Some(kind) = TokenKind::from_prefix(prefix.as_str()) else {
            continue;
        };
        if tokens.iter().any(|t| t.kind == kind) {
            trace!(%kind, raw = run.as_str(), "ignoring repeated token");
            continue;
        }

        let mut end = run.end();
        let mut date = None;

        if kind.is_date() {
            date = resolve_date(run.as_str(), now);
            if date.is_none() {
                if let Some((extended, next_end)) = extend_date(input, run.as_str(), end, now) {
                    date = Some(extended);
                    end = next_end;
                }
            }
        }

        // Raw text is sliced from the input, including whatever whitespace
        // separated a two-word date
        let value = input[run.start()..end].to_string();
        trace!(%kind, raw = value.as_str(), "found token");
        claimed_end = end;
        tokens.push(Token {
            kind,
            value,
            date,
            span: prefix.start()..end,
        });
    }

    tokens
}

/// Try joining the following word onto a date value that failed on its own
/// ("mar" + "15"). Returns the date and the end of the following word.
fn extend_date(
    input: &str,
    value: &str,
    end: usize,
    now: NaiveDateTime,
) -> Option<(NaiveDate, usize)> {
    let next = NEXT_WORD_PATTERN.captures(&input[end..])?.get(1)?;
    let date = resolve_date(&format!("{value} {}", next.as_str()), now)?;
    Some((date, end + next.end()))
}

/// Remove token spans and normalize the remaining whitespace.
fn strip_tokens(input: &str, tokens: &[Token]) -> String {
    let mut spans: Vec<&Range<usize>> = tokens.iter().map(|t| &t.span).collect();
    spans.sort_by_key(|span| span.start);

    let mut remaining = String::with_capacity(input.len());
    let mut cursor = 0;
    for span in spans {
        remaining.push_str(&input[cursor..span.start]);
        cursor = span.end;
    }
    remaining.push_str(&input[cursor..]);

    WHITESPACE_RUN.replace_all(&remaining, " ").trim().to_string()
}
