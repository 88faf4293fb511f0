//! Date token resolution.
//!
//! Turns the value of a `do:` or `due:` token into an absolute calendar date,
//! relative to a caller-supplied reference instant. Only the calendar date of
//! the reference matters; time of day never shifts the result.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

// "mar15", "mar 15", "march15", "march 15"
static MONTH_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]+) ?(\d{1,2})$").unwrap_or_else(|e| panic!("Invalid month-day regex: {e}"))
});

// "2026-03-15" or "2026/03/15"; separators are checked for consistency below
static EXACT_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})([-/])(\d{2})([-/])(\d{2})$")
        .unwrap_or_else(|e| panic!("Invalid exact date regex: {e}"))
});

// "3d", "3day", "3days", "2w", "2week", "2weeks"
static RELATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)(d|days?|w|weeks?)$")
        .unwrap_or_else(|e| panic!("Invalid relative offset regex: {e}"))
});

/// Resolve a date token against a reference instant.
///
/// Supports, in priority order:
/// - `today`, `tomorrow`, `tom`
/// - weekday names, full or 3-letter (`friday`, `fri`): the next occurrence,
///   never today
/// - month and day (`mar15`, `mar 15`, `march 15`): this year, or next year
///   if the date is today or already past
/// - exact dates (`2026-03-15`, `2026/03/15`)
/// - offsets (`3d`, `3days`, `2w`, `2weeks`)
///
/// Matching is case-insensitive. Returns `None` for anything else, including
/// impossible calendar dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quickentry::core::resolve_date;
///
/// // Friday
/// let now = NaiveDate::from_ymd_opt(2026, 2, 20)
///     .and_then(|d| d.and_hms_opt(9, 0, 0))
///     .unwrap();
///
/// assert_eq!(resolve_date("tomorrow", now), NaiveDate::from_ymd_opt(2026, 2, 21));
/// assert_eq!(resolve_date("friday", now), NaiveDate::from_ymd_opt(2026, 2, 27));
/// assert_eq!(resolve_date("2w", now), NaiveDate::from_ymd_opt(2026, 3, 6));
/// assert_eq!(resolve_date("2026-02-30", now), None);
/// ```
#[must_use]
pub fn resolve_date(token: &str, now: NaiveDateTime) -> Option<NaiveDate> {
    resolve_date_on(token, now.date())
}

/// Resolve a date token against a bare calendar date.
///
/// Same rules as [`resolve_date`].
#[must_use]
pub fn resolve_date_on(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = token.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    parse_keyword(&input, today)
        .or_else(|| parse_weekday(&input, today))
        .or_else(|| parse_month_day(&input, today))
        .or_else(|| parse_exact_date(&input))
        .or_else(|| parse_relative_offset(&input, today))
}

/// Format a date the way resolved fields are exchanged (`YYYY-MM-DD`).
#[must_use]
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_keyword(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input {
        "today" => Some(today),
        "tomorrow" | "tom" => today.succ_opt(),
        _ => None,
    }
}

/// Next strict occurrence of a weekday: requesting today's weekday lands a
/// week ahead.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let target = weekday_from_name(input)?;

    let days_until = (i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday())
        + 7)
        % 7;
    let days_until = if days_until == 0 { 7 } else { days_until };

    today.checked_add_days(Days::new(days_until.unsigned_abs()))
}

fn weekday_from_name(input: &str) -> Option<Weekday> {
    match input {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Month and day in the current year, rolled to next year when the date is
/// on or before today.
fn parse_month_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = MONTH_DAY_PATTERN.captures(input)?;
    let month = month_from_name(caps.get(1)?.as_str())?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;

    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(date) if date > today => Some(date),
        // Already passed, today, or missing this year (Feb 29)
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}

fn month_from_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

fn parse_exact_date(input: &str) -> Option<NaiveDate> {
    let caps = EXACT_DATE_PATTERN.captures(input)?;
    if caps.get(2)?.as_str() != caps.get(4)?.as_str() {
        return None;
    }

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(3)?.as_str().parse().ok()?;
    let day: u32 = caps.get(5)?.as_str().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = RELATIVE_PATTERN.captures(input)?;
    let amount: u64 = caps.get(1)?.as_str().parse().ok()?;
    if amount == 0 {
        return None;
    }

    let days = if caps.get(2)?.as_str().starts_with('w') {
        amount.checked_mul(7)?
    } else {
        amount
    };

    today.checked_add_days(Days::new(days))
}
