use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD` parsing for user input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Validate a user-supplied date and return it normalized as `YYYY-MM-DD`.
pub fn normalize_date(s: &str) -> AppResult<String> {
    parse_date(s)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// The date every view is computed against: `--today` when given,
/// the local date otherwise.
pub fn reference_date(override_date: Option<&str>) -> AppResult<NaiveDate> {
    match override_date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

/// Format with a chrono pattern from the config, falling back to ISO
/// when the pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// "March 2025"
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
