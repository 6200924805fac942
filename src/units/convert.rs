use crate::units::size::SizeUnit;
use crate::units::time::TimeUnit;

/// Express canonical bytes in the given unit.
pub fn bytes_in_unit(bytes: i64, unit: SizeUnit) -> f64 {
    bytes as f64 / unit.multiplier() as f64
}

/// Express canonical nanoseconds in the given unit.
pub fn nanos_in_unit(nanos: i64, unit: TimeUnit) -> f64 {
    nanos as f64 / unit.multiplier() as f64
}

/// Render a converted value with its unit suffix and no separator.
///
/// Integral values print without a fractional part ("1026KB"), everything
/// else keeps its natural decimal form ("1.5s", "0.75s").
pub fn format_quantity(value: f64, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}
