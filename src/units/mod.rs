pub mod byte_size;
pub mod convert;
pub mod error;
pub mod parser;
pub mod size;
pub mod time;
pub mod time_duration;

pub use byte_size::ByteSize;
pub use convert::{bytes_in_unit, format_quantity, nanos_in_unit};
pub use error::{QuantityKind, UnitError};
pub use parser::{parse_byte_size, parse_time_duration};
pub use size::SizeUnit;
pub use time::TimeUnit;
pub use time_duration::TimeDuration;

#[cfg(test)]
mod parser_test;
