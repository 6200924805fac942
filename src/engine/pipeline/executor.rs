use tracing::{debug, info};

use crate::engine::core::{ExecutorContext, Row};
use crate::engine::directive::registry::DirectiveRegistry;
use crate::engine::directive::traits::Directive;
use crate::engine::errors::PipelineError;
use crate::recipe::parse_recipe;

/// A configured run: the recipe's directives in order plus the per-run
/// execution context.
///
/// `process` accepts one batch at a time; `finish` consumes the pipeline,
/// so a finalized run cannot be fed again and finalize happens exactly once.
pub struct Pipeline {
    directives: Vec<Box<dyn Directive>>,
    ctx: ExecutorContext,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field(
                "directives",
                &self.directives.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .field("ctx", &self.ctx)
            .finish()
    }
}

impl Pipeline {
    pub fn new(directives: Vec<Box<dyn Directive>>) -> Self {
        Self {
            directives,
            ctx: ExecutorContext::new(),
        }
    }

    /// Parse recipe text against a registry and instantiate every step.
    pub fn from_recipe(text: &str, registry: &DirectiveRegistry) -> Result<Self, PipelineError> {
        let parsed = parse_recipe(text, registry)?;

        let mut directives: Vec<Box<dyn Directive>> = Vec::with_capacity(parsed.len());
        for item in parsed {
            let registration = registry
                .get(item.name)
                .ok_or_else(|| crate::recipe::ParseError::UnknownDirective(item.name.to_string()))?;
            let directive =
                registration
                    .instantiate(&item.args)
                    .map_err(|source| PipelineError::Step {
                        step: directives.len(),
                        directive: item.name.to_string(),
                        source,
                    })?;
            directives.push(directive);
        }

        info!(target: "rowforge::pipeline", steps = directives.len(), "Pipeline assembled");
        Ok(Self::new(directives))
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Feed one batch through every step in order; step i's output is step
    /// i+1's input. Aggregating steps hold their rows back, so interim
    /// output is often empty.
    pub fn process(&mut self, batch: Vec<Row>) -> Result<Vec<Row>, PipelineError> {
        let rows_in = batch.len();
        let mut rows = batch;

        for (step, directive) in self.directives.iter_mut().enumerate() {
            let name = directive.name();
            rows = directive
                .execute(rows, &mut self.ctx)
                .map_err(|source| PipelineError::Step {
                    step,
                    directive: name.to_string(),
                    source,
                })?;
        }

        self.ctx.advance_batch(rows_in);
        debug!(
            target: "rowforge::pipeline",
            batch = self.ctx.batch_index(),
            rows_in,
            rows_out = rows.len(),
            "Processed batch"
        );
        Ok(rows)
    }

    /// End of stream. Finalizes steps in pipeline order and drains each
    /// step's summary through the steps after it, so a downstream transform
    /// still sees rows emitted by an upstream aggregator.
    pub fn finish(mut self) -> Result<Vec<Row>, PipelineError> {
        let mut output = Vec::new();

        for step in 0..self.directives.len() {
            let name = self.directives[step].name();
            let mut rows = self.directives[step]
                .finalize(&mut self.ctx)
                .map_err(|source| PipelineError::Step {
                    step,
                    directive: name.to_string(),
                    source,
                })?;

            for later in step + 1..self.directives.len() {
                if rows.is_empty() {
                    break;
                }
                let later_name = self.directives[later].name();
                rows = self.directives[later]
                    .execute(rows, &mut self.ctx)
                    .map_err(|source| PipelineError::Step {
                        step: later,
                        directive: later_name.to_string(),
                        source,
                    })?;
            }

            output.extend(rows);
        }

        info!(target: "rowforge::pipeline", rows = output.len(), "Pipeline finished");
        Ok(output)
    }
}
