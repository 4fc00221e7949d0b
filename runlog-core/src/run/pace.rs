use super::elapsed_time::ElapsedTime;
use std::fmt;

/// Minutes per distance unit, rounded to the nearest second.
///
/// Ordering is minutes first, then seconds, so the smaller pace is the faster one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pace {
    minutes: u64,
    seconds: u8,
}

impl Pace {
    /// Derives the pace of covering `distance` in `elapsed`.
    ///
    /// The total is rounded to whole seconds before it is split, so a value like
    /// 5:59.6 becomes `6:00` rather than `5:60`. `distance` must already be validated.
    pub fn from_run(elapsed: ElapsedTime, distance: f64) -> Self {
        let seconds_per_unit = elapsed.total_seconds() as f64 / distance;
        Self::from_seconds(seconds_per_unit.round() as u64)
    }

    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            minutes: total_seconds / 60,
            seconds: (total_seconds % 60) as u8,
        }
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        self.minutes * 60 + u64::from(self.seconds)
    }

    /// True when `self` is strictly faster than `other`.
    pub fn is_faster_than(&self, other: &Pace) -> bool {
        self < other
    }
}

/// `minutes:seconds`, seconds zero-padded (e.g. `5:07`).
impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pace(distance: f64, time: &str) -> Pace {
        Pace::from_run(ElapsedTime::parse(time).unwrap(), distance)
    }

    #[test]
    fn even_pace() {
        assert_eq!(pace(6.0, "00:30:00").to_string(), "5:00");
    }

    #[test]
    fn fractional_distance_rounds_to_nearest_second() {
        // (42 + 14/60) / 4.13 = 10.2259... minutes = 10:13.56
        assert_eq!(pace(4.13, "00:42:14").to_string(), "10:14");
    }

    #[test]
    fn rounding_carry_rolls_into_the_next_minute() {
        // 719s / 2.0 = 359.5s, which rounds to 6:00 and never renders as 5:60
        let p = pace(2.0, "11:59");
        assert_eq!(p.to_string(), "6:00");
        assert_eq!(p.minutes(), 6);
        assert_eq!(p.seconds(), 0);
    }

    #[test]
    fn seconds_are_zero_padded() {
        assert_eq!(Pace::from_seconds(307).to_string(), "5:07");
    }

    #[test]
    fn lower_minutes_win_then_lower_seconds() {
        let a = Pace::from_seconds(4 * 60 + 59);
        let b = Pace::from_seconds(5 * 60);
        let c = Pace::from_seconds(5 * 60 + 1);
        assert!(a.is_faster_than(&b));
        assert!(b.is_faster_than(&c));
        assert!(!c.is_faster_than(&a));
    }

    #[test]
    fn equal_paces_are_not_faster() {
        let a = Pace::from_seconds(300);
        assert!(!a.is_faster_than(&Pace::from_seconds(300)));
    }
}
