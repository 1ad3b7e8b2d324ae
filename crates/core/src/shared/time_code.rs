use std::fmt;
use std::ops::Sub;

use thiserror::Error;

/// A subtitle timestamp: milliseconds since track start.
///
/// Millisecond precision matches the SubRip `HH:MM:SS,mmm` form. Conversions
/// from floating-point seconds truncate to the millisecond so timestamps
/// derived from the recognizer's second offsets stay stable across runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeCode {
    millis: u64,
}

#[derive(Error, Debug)]
#[error("invalid timestamp '{0}', expected HH:MM:SS,mmm")]
pub struct TimeCodeParseError(String);

impl TimeCode {
    pub const ZERO: TimeCode = TimeCode { millis: 0 };

    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Truncates to the millisecond, never rounds up.
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            millis: (seconds * 1000.0) as u64,
        }
    }

    pub fn total_millis(&self) -> u64 {
        self.millis
    }

    pub fn as_seconds(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    pub fn hours(&self) -> u64 {
        self.millis / 3_600_000
    }

    pub fn minutes(&self) -> u64 {
        self.millis % 3_600_000 / 60_000
    }

    pub fn seconds(&self) -> u64 {
        self.millis % 60_000 / 1_000
    }

    pub fn subsec_millis(&self) -> u64 {
        self.millis % 1_000
    }

    /// Parses the SubRip timestamp form `HH:MM:SS,mmm`.
    pub fn parse(text: &str) -> Result<Self, TimeCodeParseError> {
        let malformed = || TimeCodeParseError(text.to_string());

        let (clock, millis_text) = text.split_once(',').ok_or_else(malformed)?;
        let (hours_text, rest) = clock.split_once(':').ok_or_else(malformed)?;
        let (minutes_text, seconds_text) = rest.split_once(':').ok_or_else(malformed)?;

        let hours: u64 = hours_text.parse().map_err(|_| malformed())?;
        let minutes: u64 = minutes_text.parse().map_err(|_| malformed())?;
        let seconds: u64 = seconds_text.parse().map_err(|_| malformed())?;
        let millis: u64 = millis_text.parse().map_err(|_| malformed())?;

        if minutes > 59 || seconds > 59 || millis > 999 {
            return Err(malformed());
        }

        Ok(Self::from_millis(
            ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
        ))
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.subsec_millis()
        )
    }
}

impl Sub for TimeCode {
    type Output = TimeCode;

    /// Saturating: upstream invariants keep spans non-negative, so an
    /// inverted pair clamps to zero instead of wrapping.
    fn sub(self, rhs: TimeCode) -> TimeCode {
        TimeCode::from_millis(self.millis.saturating_sub(rhs.millis))
    }
}
