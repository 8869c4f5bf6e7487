use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Accepted date formats, tried in order. The order is part of the public
/// contract: ambiguous inputs such as `01/02/2024` resolve to whichever
/// format matches first (day/month before month/day here).
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%m-%d-%Y", "%Y/%m/%d", "%Y-%m-%d"];

/// Accepted datetime formats, tried in order (same priority rule as dates).
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M",
    "%m-%d-%Y %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Error type raised when an input string matches none of the accepted
/// formats. The message enumerates every format a caller may use.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid date format. Please provide the date in one of the following formats: DD/MM/YYYY, MM-DD-YYYY, YYYY/MM/DD, or YYYY-MM-DD.")]
    InvalidDateFormat,
    #[error("Invalid datetime format. Please provide the datetime in one of the following formats: DD/MM/YYYY HH:MM, MM-DD-YYYY HH:MM, YYYY/MM/DD HH:MM, or YYYY-MM-DDTHH:MM:SS.")]
    InvalidDateTimeFormat,
}

/// Parses a loosely-formatted date string into a naive calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = text.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(date);
        }
    }
    Err(ParseError::InvalidDateFormat)
}

/// Parses a loosely-formatted datetime string into a naive datetime.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, ParseError> {
    let trimmed = text.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(datetime);
        }
    }
    Err(ParseError::InvalidDateTimeFormat)
}
