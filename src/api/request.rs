//! # API Requests
//!
//! Form and query-string shapes for all supported operations, plus the
//! parse-and-validate helpers that turn raw client fields into typed
//! values. Malformed input is rejected here with a 400; nothing invalid
//! ever reaches the store.
//!
//! Browsers submit empty form fields as empty strings, so "present but
//! empty" and "absent" both count as missing.

use chrono::NaiveDate;
use serde::Deserialize;

use super::errors::{ApiError, ApiResult};

/// Accepted calendar date format (ISO year-month-day)
const DATE_FORMAT: &str = "%Y-%m-%d";

/// User creation form
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserForm {
    pub username: Option<String>,
}

/// Exercise creation form
#[derive(Debug, Clone, Deserialize)]
pub struct AddExerciseForm {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Log retrieval query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Collapses empty and whitespace-only fields to `None`.
pub fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// Parses a duration as a whole number of minutes.
pub fn parse_duration(raw: &str) -> ApiResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidDuration(raw.to_string()))
}

/// Parses a calendar date in ISO form (`2023-01-15`).
pub fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ApiError::InvalidDate(raw.to_string()))
}

/// Parses a result-count limit.
pub fn parse_limit(raw: &str) -> ApiResult<usize> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidLimit(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("alice".to_string())), Some("alice".to_string()));
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30").unwrap(), 30);
        assert_eq!(parse_duration(" 45 ").unwrap(), 45);
        assert!(matches!(
            parse_duration("thirty"),
            Err(ApiError::InvalidDuration(_))
        ));
        assert!(parse_duration("1.5").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2023-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
        assert!(matches!(
            parse_date("15/01/2023"),
            Err(ApiError::InvalidDate(_))
        ));
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("5").unwrap(), 5);
        assert_eq!(parse_limit("0").unwrap(), 0);
        assert!(matches!(parse_limit("-1"), Err(ApiError::InvalidLimit(_))));
        assert!(parse_limit("many").is_err());
    }
}
