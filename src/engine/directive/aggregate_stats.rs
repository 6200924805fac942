use serde_json::Value;
use tracing::{debug, info};

use crate::engine::core::{ExecutorContext, Row};
use crate::engine::directive::accumulator::StatsAccumulator;
use crate::engine::directive::args::Arguments;
use crate::engine::directive::traits::Directive;
use crate::engine::directive::usage::UsageDefinition;
use crate::engine::errors::DirectiveError;
use crate::units::{
    SizeUnit, TimeUnit, UnitError, bytes_in_unit, format_quantity, nanos_in_unit, parse_byte_size,
    parse_time_duration,
};

/// How finalize reduces the accumulated totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    Total,
    Average,
}

impl AggregationMode {
    fn from_arg(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("total") {
            Some(AggregationMode::Total)
        } else if value.eq_ignore_ascii_case("average") {
            Some(AggregationMode::Average)
        } else {
            None
        }
    }
}

/// Where the run stands. `execute` is re-entrant while accumulating;
/// finalizing is terminal and rejects any further call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Init,
    Accumulating,
    Finalized,
}

/// `aggregate-stats` parses a byte-size column and a time-duration column on
/// every row, folds their canonical values into running totals, and emits a
/// single two-column summary row when the stream ends.
///
/// Recipe form:
///
/// ```text
/// aggregate-stats :size_col :time_col total_size total_time [size_unit] [time_unit] [mode]
/// ```
///
/// `size_unit` defaults to `B`, `time_unit` to `ns`, `mode` to `total`
/// (`average` divides both totals by the row count). A row with a missing,
/// null, or unparseable source cell aborts the run.
#[derive(Debug)]
pub struct AggregateStats {
    source_size: String,
    source_time: String,
    target_size: String,
    target_time: String,
    size_unit: SizeUnit,
    time_unit: TimeUnit,
    mode: AggregationMode,
    acc: StatsAccumulator,
    phase: Phase,
}

impl AggregateStats {
    pub fn usage() -> UsageDefinition {
        UsageDefinition::builder("aggregate-stats")
            .required_column("source_size")
            .required_column("source_time")
            .required_text("target_size")
            .required_text("target_time")
            .optional_text("size_unit", "B")
            .optional_text("time_unit", "ns")
            .optional_text("mode", "total")
            .build()
    }

    pub fn from_args(args: &Arguments) -> Result<Self, DirectiveError> {
        let size_unit: SizeUnit =
            args.text("size_unit")?
                .parse()
                .map_err(|e: UnitError| DirectiveError::InvalidArgument {
                    name: "size_unit".to_string(),
                    reason: e.to_string(),
                })?;
        let time_unit: TimeUnit =
            args.text("time_unit")?
                .parse()
                .map_err(|e: UnitError| DirectiveError::InvalidArgument {
                    name: "time_unit".to_string(),
                    reason: e.to_string(),
                })?;

        let mode_arg = args.text("mode")?;
        let mode =
            AggregationMode::from_arg(mode_arg).ok_or_else(|| DirectiveError::InvalidArgument {
                name: "mode".to_string(),
                reason: format!("expected 'total' or 'average', got '{}'", mode_arg),
            })?;

        Ok(Self {
            source_size: args.column("source_size")?.to_string(),
            source_time: args.column("source_time")?.to_string(),
            target_size: args.text("target_size")?.to_string(),
            target_time: args.text("target_time")?.to_string(),
            size_unit,
            time_unit,
            mode,
            acc: StatsAccumulator::new(),
            phase: Phase::Init,
        })
    }

    /// Snapshot of the running totals, for callers that fold partials from
    /// independent slices of a stream.
    pub fn snapshot(&self) -> StatsAccumulator {
        self.acc
    }

    /// Fold a partial computed over another slice into this run.
    pub fn merge_partial(&mut self, partial: &StatsAccumulator) -> Result<(), DirectiveError> {
        if self.phase == Phase::Finalized {
            return Err(DirectiveError::AlreadyFinalized {
                directive: "aggregate-stats",
            });
        }
        self.phase = Phase::Accumulating;
        self.acc.merge(partial);
        Ok(())
    }

    fn require_text(row: &Row, column: &str, row_index: u64) -> Result<String, DirectiveError> {
        row.value_as_string(column)
            .ok_or_else(|| DirectiveError::MissingValue {
                row: row_index,
                column: column.to_string(),
            })
    }
}

impl Directive for AggregateStats {
    fn name(&self) -> &'static str {
        "aggregate-stats"
    }

    fn execute(
        &mut self,
        batch: Vec<Row>,
        ctx: &mut ExecutorContext,
    ) -> Result<Vec<Row>, DirectiveError> {
        if self.phase == Phase::Finalized {
            return Err(DirectiveError::AlreadyFinalized {
                directive: self.name(),
            });
        }
        self.phase = Phase::Accumulating;

        for (offset, row) in batch.iter().enumerate() {
            let row_index = ctx.row_index(offset);

            let size_raw = Self::require_text(row, &self.source_size, row_index)?;
            let time_raw = Self::require_text(row, &self.source_time, row_index)?;

            let size_bytes =
                parse_byte_size(&size_raw).map_err(|source| DirectiveError::Quantity {
                    row: row_index,
                    column: self.source_size.clone(),
                    source,
                })?;
            let time_nanos =
                parse_time_duration(&time_raw).map_err(|source| DirectiveError::Quantity {
                    row: row_index,
                    column: self.source_time.clone(),
                    source,
                })?;

            self.acc.update(size_bytes, time_nanos);
        }

        debug!(
            target: "rowforge::aggregate",
            rows = batch.len(),
            count = self.acc.count(),
            "Accumulated batch"
        );

        // The summary exists only at finalize; nothing flows downstream yet.
        Ok(Vec::new())
    }

    fn finalize(&mut self, _ctx: &mut ExecutorContext) -> Result<Vec<Row>, DirectiveError> {
        if self.phase == Phase::Finalized {
            return Err(DirectiveError::AlreadyFinalized {
                directive: self.name(),
            });
        }
        self.phase = Phase::Finalized;

        let size_total = bytes_in_unit(self.acc.total_size_bytes(), self.size_unit);
        let time_total = nanos_in_unit(self.acc.total_time_nanos(), self.time_unit);

        let (size_value, time_value) = match self.mode {
            AggregationMode::Total => (size_total, time_total),
            // An average over zero rows is zero, not a division error.
            AggregationMode::Average if self.acc.is_empty() => (0.0, 0.0),
            AggregationMode::Average => {
                let rows = self.acc.count() as f64;
                (size_total / rows, time_total / rows)
            }
        };

        info!(
            target: "rowforge::aggregate",
            count = self.acc.count(),
            mode = ?self.mode,
            "Finalizing aggregation run"
        );

        let mut summary = Row::new();
        summary.set(
            &self.target_size,
            Value::String(format_quantity(size_value, self.size_unit.suffix())),
        );
        summary.set(
            &self.target_time,
            Value::String(format_quantity(time_value, self.time_unit.suffix())),
        );

        Ok(vec![summary])
    }
}
