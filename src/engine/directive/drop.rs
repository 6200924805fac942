use crate::engine::core::{ExecutorContext, Row};
use crate::engine::directive::args::Arguments;
use crate::engine::directive::traits::Directive;
use crate::engine::directive::usage::UsageDefinition;
use crate::engine::errors::DirectiveError;

/// `drop :column` removes a column from every row. Rows without the column
/// pass through unchanged.
pub struct DropColumn {
    column: String,
}

impl DropColumn {
    pub fn usage() -> UsageDefinition {
        UsageDefinition::builder("drop")
            .required_column("column")
            .build()
    }

    pub fn from_args(args: &Arguments) -> Result<Self, DirectiveError> {
        Ok(Self {
            column: args.column("column")?.to_string(),
        })
    }
}

impl Directive for DropColumn {
    fn name(&self) -> &'static str {
        "drop"
    }

    fn execute(
        &mut self,
        mut batch: Vec<Row>,
        _ctx: &mut ExecutorContext,
    ) -> Result<Vec<Row>, DirectiveError> {
        for row in &mut batch {
            row.remove(&self.column);
        }
        Ok(batch)
    }
}
