use crate::error::{Result, RunLogError};
use chrono::{Local, NaiveDate};

/// Format of dates in run records and lookups.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date. Padding is not accepted.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let date_error = |reason: String| RunLogError::DateParse {
        input: input.to_string(),
        reason,
    };
    // chrono skips leading whitespace before numeric fields
    if input.trim() != input {
        return Err(date_error("surrounding whitespace".to_string()));
    }
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).map_err(|e| date_error(e.to_string()))
}

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
