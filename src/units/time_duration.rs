use std::fmt;
use std::str::FromStr;

use crate::units::convert::nanos_in_unit;
use crate::units::error::UnitError;
use crate::units::parser::parse_time_duration;
use crate::units::time::TimeUnit;

/// A parsed time-duration literal, canonicalized to nanoseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDuration {
    raw: String,
    nanos: i64,
}

impl TimeDuration {
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        let nanos = parse_time_duration(input)?;
        Ok(Self {
            raw: input.trim().to_string(),
            nanos,
        })
    }

    /// Canonical value in nanoseconds.
    pub fn nanos(&self) -> i64 {
        self.nanos
    }

    /// The canonical value expressed in another unit.
    pub fn in_unit(&self, unit: TimeUnit) -> f64 {
        nanos_in_unit(self.nanos, unit)
    }
}

impl FromStr for TimeDuration {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeDuration::parse(s)
    }
}

impl fmt::Display for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
