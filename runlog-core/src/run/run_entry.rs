use super::elapsed_time::ElapsedTime;
use super::pace::Pace;
use crate::error::{Result, ValidationError};
use crate::utils::date_utils::{ISO_DATE_FORMAT, parse_iso_date, today};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// Distances below this are treated as zero.
pub const MIN_DISTANCE: f64 = 0.001;

/// Lowest and highest accepted rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// A single logged run.
///
/// Date and distance are fixed at construction. The pace is derived from the
/// distance and elapsed time and recomputed whenever the time changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RunEntry {
    date: NaiveDate,
    distance: f64,
    elapsed: ElapsedTime,
    pace: Pace,
    title: Option<String>,
    location: Option<String>,
    description: Option<String>,
    rating: u8,
}

impl RunEntry {
    /// Creates a run from raw inputs.
    ///
    /// # Arguments
    ///
    /// * `distance` - distance covered, must be greater than zero.
    /// * `time` - elapsed time as `SS`, `MM:SS` or `HH:MM:SS`.
    /// * `date` - optional `YYYY-MM-DD` date. Defaults to today.
    pub fn new(distance: f64, time: &str, date: Option<&str>) -> Result<Self> {
        let distance = validate_distance(distance)?;
        let elapsed = ElapsedTime::parse(time)?;
        let date = match date {
            Some(date) => parse_iso_date(date)?,
            None => today(),
        };
        Ok(Self::from_parts(date, distance, elapsed))
    }

    /// Creates a run on an already known date.
    pub fn on(date: NaiveDate, distance: f64, time: &str) -> Result<Self> {
        let distance = validate_distance(distance)?;
        let elapsed = ElapsedTime::parse(time)?;
        Ok(Self::from_parts(date, distance, elapsed))
    }

    fn from_parts(date: NaiveDate, distance: f64, elapsed: ElapsedTime) -> Self {
        Self {
            date,
            distance,
            elapsed,
            pace: Pace::from_run(elapsed, distance),
            title: None,
            location: None,
            description: None,
            rating: 0,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn elapsed_time(&self) -> ElapsedTime {
        self.elapsed
    }

    pub fn pace(&self) -> Pace {
        self.pace
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The rating, or 0 when it has never been set.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Sets the rating. Only values from 1 to 10 are accepted.
    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        if !RATING_RANGE.contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating).into());
        }
        self.rating = rating;
        Ok(())
    }

    /// Replaces the elapsed time and re-derives the pace.
    /// On error the run is left as it was.
    pub fn set_elapsed_time(&mut self, time: &str) -> Result<()> {
        let elapsed = ElapsedTime::parse(time)?;
        self.elapsed = elapsed;
        self.pace = Pace::from_run(elapsed, self.distance);
        Ok(())
    }

    /// Orders runs by date only. This is the ledger's sort key.
    pub fn compare_by_date(&self, other: &RunEntry) -> Ordering {
        self.date.cmp(&other.date)
    }
}

fn validate_distance(distance: f64) -> Result<f64> {
    if distance.is_finite() && distance >= MIN_DISTANCE {
        Ok(distance)
    } else {
        Err(ValidationError::NonPositiveDistance.into())
    }
}

/// Fixed four-line summary. The distance is printed as stored, unrounded:
///
/// ```text
/// Date of Run: 2024-11-26
/// Time Ran: 00:42:14
/// Distance Ran: 4.13
/// Pace of Run: 10:14
/// ```
impl fmt::Display for RunEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date of Run: {}", self.date.format(ISO_DATE_FORMAT))?;
        writeln!(f, "Time Ran: {}", self.elapsed)?;
        writeln!(f, "Distance Ran: {}", self.distance)?;
        write!(f, "Pace of Run: {}", self.pace)
    }
}
