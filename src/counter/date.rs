//! Calendar arithmetic and date formatting for the displayed date.

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate};
use std::fmt::Write;
use thiserror::Error;

/// Default display format, e.g. `Mon Oct 19 2026`.
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %Y";

/// Shown in place of a date that falls outside the calendar range.
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("date format is empty")]
    Empty,
    #[error("invalid date format `{0}`")]
    Invalid(String),
}

/// `today` shifted by `days` whole days, or `None` if the result is not
/// representable.
pub fn offset_date(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        today.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Render `date` with `format`, falling back to [`DEFAULT_DATE_FORMAT`] when
/// the format cannot render a plain date.
pub fn format_date(date: Option<NaiveDate>, format: &str) -> String {
    let Some(d) = date else {
        return INVALID_DATE.to_string();
    };
    try_format(d, format)
        .or_else(|| try_format(d, DEFAULT_DATE_FORMAT))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// `None` when chrono rejects the format for a `NaiveDate`, e.g. a time or
/// timezone field.
fn try_format(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Formats from config are checked up front by rendering a sample date.
pub fn validate_format(format: &str) -> Result<(), DateFormatError> {
    if format.is_empty() {
        return Err(DateFormatError::Empty);
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        || try_format(NaiveDate::MIN, format).is_none()
    {
        return Err(DateFormatError::Invalid(format.to_string()));
    }
    Ok(())
}
