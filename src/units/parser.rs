use once_cell::sync::Lazy;
use regex::Regex;

use crate::units::error::{QuantityKind, UnitError};
use crate::units::size::SizeUnit;
use crate::units::time::TimeUnit;

/// Shape of a quantity literal: a non-negative decimal magnitude followed by
/// an optional alphabetic suffix, with optional whitespace between them.
/// The suffix is matched loosely here and validated against the unit table
/// afterwards, so `5ZB` reports an unknown unit instead of a bad literal.
static QUANTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*([A-Za-z]+)?$").expect("invalid quantity regex"));

struct RawQuantity<'a> {
    magnitude: f64,
    suffix: Option<&'a str>,
}

fn match_literal<'a>(input: &'a str, kind: QuantityKind) -> Result<RawQuantity<'a>, UnitError> {
    let trimmed = input.trim();
    let caps = QUANTITY_RE
        .captures(trimmed)
        .ok_or_else(|| UnitError::InvalidFormat {
            kind,
            input: input.to_string(),
        })?;

    let magnitude = caps[1].parse::<f64>().map_err(|_| UnitError::InvalidFormat {
        kind,
        input: input.to_string(),
    })?;

    Ok(RawQuantity {
        magnitude,
        suffix: caps.get(2).map(|m| m.as_str()),
    })
}

/// Canonical values truncate toward zero, so `2.5ns` is 2 nanoseconds and
/// `0.5B` is 0 bytes.
fn to_canonical(magnitude: f64, multiplier: i64) -> i64 {
    (magnitude * multiplier as f64) as i64
}

/// Parse a byte-size literal into canonical bytes.
///
/// A bare magnitude ("100") is taken as bytes. Suffixes are resolved
/// case-insensitively against [`SizeUnit::ALL`].
pub fn parse_byte_size(input: &str) -> Result<i64, UnitError> {
    let raw = match_literal(input, QuantityKind::Size)?;
    let unit = match raw.suffix {
        None => SizeUnit::Bytes,
        Some(suffix) => SizeUnit::from_suffix(suffix).ok_or_else(|| UnitError::UnknownUnit {
            kind: QuantityKind::Size,
            unit: suffix.to_string(),
        })?,
    };
    Ok(to_canonical(raw.magnitude, unit.multiplier()))
}

/// Parse a time-duration literal into canonical nanoseconds.
///
/// A bare magnitude ("250") is taken as nanoseconds. Suffixes are resolved
/// case-insensitively against [`TimeUnit::ALL`].
pub fn parse_time_duration(input: &str) -> Result<i64, UnitError> {
    let raw = match_literal(input, QuantityKind::Time)?;
    let unit = match raw.suffix {
        None => TimeUnit::Nanoseconds,
        Some(suffix) => TimeUnit::from_suffix(suffix).ok_or_else(|| UnitError::UnknownUnit {
            kind: QuantityKind::Time,
            unit: suffix.to_string(),
        })?,
    };
    Ok(to_canonical(raw.magnitude, unit.multiplier()))
}
