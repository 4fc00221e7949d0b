use crate::run::RunEntry;
use crate::utils::date_utils::parse_iso_date;
use chrono::NaiveDate;

/// Test helper for a `YYYY-MM-DD` date.
pub fn day(date: &str) -> NaiveDate {
    parse_iso_date(date).expect("valid test date")
}

/// Test helper for a valid run on `date`.
pub fn mk_run(date: &str, distance: f64, time: &str) -> RunEntry {
    RunEntry::new(distance, time, Some(date)).expect("valid test run")
}
