pub mod accumulator;
pub mod aggregate_stats;
pub mod args;
pub mod drop;
pub mod registry;
pub mod rename;
pub mod traits;
pub mod usage;

pub use accumulator::StatsAccumulator;
pub use aggregate_stats::{AggregateStats, AggregationMode};
pub use args::Arguments;
pub use registry::DirectiveRegistry;
pub use traits::Directive;
pub use usage::{ArgKind, UsageDefinition};

#[cfg(test)]
mod drop_test;
