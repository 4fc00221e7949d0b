use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// How long a run took, normalized to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElapsedTime {
    total_seconds: u64,
}

impl ElapsedTime {
    /// Parses `SS`, `MM:SS` or `HH:MM:SS`. The rightmost field is always seconds.
    ///
    /// Fields are not range-limited, so `"90"` is the same as `"1:30"`.
    /// Rejects empty input, any character other than digits and `:`, more than
    /// three fields, empty fields and a total of zero.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptyTime);
        }
        if let Some(c) = input.chars().find(|c| !c.is_ascii_digit() && *c != ':') {
            return Err(ValidationError::IllegalCharacter(c));
        }

        let fields: Vec<&str> = input.split(':').collect();
        if fields.len() > 3 {
            return Err(ValidationError::TooManyFields(fields.len()));
        }

        let mut total_seconds: u64 = 0;
        for field in &fields {
            let value = field
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidField(field.to_string()))?;
            total_seconds = total_seconds
                .checked_mul(60)
                .and_then(|t| t.checked_add(value))
                .ok_or_else(|| ValidationError::InvalidField(field.to_string()))?;
        }

        if total_seconds == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(Self { total_seconds })
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn total_minutes(&self) -> f64 {
        self.total_seconds as f64 / 60.0
    }

    pub fn hours(&self) -> u64 {
        self.total_seconds / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.total_seconds % 3600) / 60
    }

    pub fn seconds(&self) -> u64 {
        self.total_seconds % 60
    }
}

impl FromStr for ElapsedTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `HH:MM:SS`, each field zero-padded to two digits.
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
