use std::fmt;
use std::str::FromStr;

use crate::units::convert::bytes_in_unit;
use crate::units::error::UnitError;
use crate::units::parser::parse_byte_size;
use crate::units::size::SizeUnit;

/// A parsed byte-size literal. Keeps the text as written alongside the
/// canonical value, so `10KB` round-trips in display while arithmetic
/// happens in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSize {
    raw: String,
    bytes: i64,
}

impl ByteSize {
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        let bytes = parse_byte_size(input)?;
        Ok(Self {
            raw: input.trim().to_string(),
            bytes,
        })
    }

    /// Canonical value in bytes.
    pub fn bytes(&self) -> i64 {
        self.bytes
    }

    /// The canonical value expressed in another unit.
    pub fn in_unit(&self, unit: SizeUnit) -> f64 {
        bytes_in_unit(self.bytes, unit)
    }
}

impl FromStr for ByteSize {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ByteSize::parse(s)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
