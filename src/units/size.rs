use std::fmt;
use std::str::FromStr;

use crate::units::error::{QuantityKind, UnitError};

/// Byte-size units. Steps are 1024-based, so `1KB` is 1024 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl SizeUnit {
    /// The full unit table, smallest multiplier first.
    pub const ALL: [SizeUnit; 5] = [
        SizeUnit::Bytes,
        SizeUnit::Kilobytes,
        SizeUnit::Megabytes,
        SizeUnit::Gigabytes,
        SizeUnit::Terabytes,
    ];

    /// Multiplier from this unit to canonical bytes.
    pub const fn multiplier(self) -> i64 {
        match self {
            SizeUnit::Bytes => 1,
            SizeUnit::Kilobytes => 1 << 10,
            SizeUnit::Megabytes => 1 << 20,
            SizeUnit::Gigabytes => 1 << 30,
            SizeUnit::Terabytes => 1 << 40,
        }
    }

    /// Suffix as written in literals and rendered output.
    pub const fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Bytes => "B",
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
            SizeUnit::Terabytes => "TB",
        }
    }

    /// Case-insensitive lookup against the unit table.
    pub fn from_suffix(s: &str) -> Option<SizeUnit> {
        SizeUnit::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for SizeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SizeUnit::from_suffix(trimmed).ok_or_else(|| UnitError::UnknownUnit {
            kind: QuantityKind::Size,
            unit: trimmed.to_string(),
        })
    }
}
