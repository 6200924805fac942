use thiserror::Error;
use tracing::{debug, error};

use crate::recipe::ParseError;
use crate::units::UnitError;

/// Errors a directive can raise while executing or finalizing a run.
///
/// Every variant aborts the run. Aggregation over a row stream is
/// deterministic, so skipping rows or retrying would only change the answer
/// silently; callers get the error and no partial summary instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DirectiveError {
    /// A configured source column was absent or null on some row.
    #[error("row {row}: missing value for column '{column}'")]
    MissingValue { row: u64, column: String },

    /// A cell failed quantity parsing; the source error carries the detail.
    #[error("row {row}, column '{column}': {source}")]
    Quantity {
        row: u64,
        column: String,
        #[source]
        source: UnitError,
    },

    /// A bound argument was rejected while constructing the directive.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The run was already finalized; no further calls are accepted.
    #[error("directive '{directive}' has already finalized its run")]
    AlreadyFinalized { directive: &'static str },
}

/// Errors raised while assembling or driving a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("step {step} ('{directive}') failed: {source}")]
    Step {
        step: usize,
        directive: String,
        #[source]
        source: DirectiveError,
    },

    #[error("recipe error: {0}")]
    Recipe(#[from] ParseError),
}

impl PipelineError {
    pub fn log_error(&self) {
        match self {
            PipelineError::Step {
                step,
                directive,
                source,
            } => {
                error!(target: "rowforge::pipeline", step, directive, "Step failed: {}", source);
                debug!(target: "rowforge::pipeline", "Step failure details: {:?}", source);
            }
            PipelineError::Recipe(e) => {
                error!(target: "rowforge::pipeline", "Recipe rejected: {}", e);
                debug!(target: "rowforge::pipeline", "Recipe failure details: {:?}", e);
            }
        }
    }
}
