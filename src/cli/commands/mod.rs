//! Command implementations for quickentry.
//!
//! This module contains the implementation of all CLI commands.

mod date;
mod entities;
mod parse;

pub use date::date;
pub use entities::{entities, match_entity};
pub use parse::parse;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap_complete::Shell;

use crate::error::QuickEntryError;
use crate::features::shell::generate_completions;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell) -> Result<String, QuickEntryError> {
    generate_completions(shell)
}

/// Resolve the reference time for a command.
///
/// `None` means the current local time. Otherwise accepts `YYYY-MM-DD`
/// (midnight), `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
///
/// Returns `QuickEntryError::InvalidReferenceTime` for any other value.
pub fn reference_time(value: Option<&str>) -> Result<NaiveDateTime, QuickEntryError> {
    let Some(value) = value else {
        return Ok(Local::now().naive_local());
    };
    let value = value.trim();

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(datetime);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| QuickEntryError::InvalidReferenceTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_reference_time_date_only() {
        assert_eq!(
            reference_time(Some("2026-02-20")).unwrap(),
            datetime(2026, 2, 20, 0, 0, 0)
        );
    }

    #[test]
    fn test_reference_time_datetime_forms() {
        assert_eq!(
            reference_time(Some("2026-02-20T14:30:00")).unwrap(),
            datetime(2026, 2, 20, 14, 30, 0)
        );
        assert_eq!(
            reference_time(Some(" 2026-02-20 14:30:00 ")).unwrap(),
            datetime(2026, 2, 20, 14, 30, 0)
        );
    }

    #[test]
    fn test_reference_time_invalid() {
        for bad in ["tomorrow", "2026-02-30", "20/02/2026", ""] {
            let err = reference_time(Some(bad)).unwrap_err();
            assert!(matches!(err, QuickEntryError::InvalidReferenceTime(_)), "{bad}");
        }
    }

    #[test]
    fn test_reference_time_defaults_to_now() {
        let before = Local::now().naive_local();
        let now = reference_time(None).unwrap();
        assert!(now >= before);
    }
}
