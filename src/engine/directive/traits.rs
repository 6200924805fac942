use crate::engine::core::{ExecutorContext, Row};
use crate::engine::errors::DirectiveError;

/// A recipe step with a two-phase lifecycle: `execute` runs once per input
/// batch for as long as the stream lasts, then `finalize` runs exactly once
/// when the stream is exhausted.
///
/// Pass-through steps transform and return the batch. Aggregating steps
/// fold batches into internal state, return nothing from `execute`, and
/// emit their summary from `finalize`.
pub trait Directive: Send {
    /// Name as written in recipes.
    fn name(&self) -> &'static str;

    /// Process one batch of rows.
    fn execute(
        &mut self,
        batch: Vec<Row>,
        ctx: &mut ExecutorContext,
    ) -> Result<Vec<Row>, DirectiveError>;

    /// End-of-stream hook. The default emits nothing, which is what every
    /// pass-through step wants.
    fn finalize(&mut self, _ctx: &mut ExecutorContext) -> Result<Vec<Row>, DirectiveError> {
        Ok(Vec::new())
    }
}
