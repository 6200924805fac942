use crate::engine::core::{ExecutorContext, Row};
use crate::engine::directive::args::Arguments;
use crate::engine::directive::traits::Directive;
use crate::engine::directive::usage::UsageDefinition;
use crate::engine::errors::DirectiveError;

/// `rename :from :to` relabels a column on every row, keeping its position.
/// Rows without the column pass through unchanged.
pub struct Rename {
    from: String,
    to: String,
}

impl Rename {
    pub fn usage() -> UsageDefinition {
        UsageDefinition::builder("rename")
            .required_column("from")
            .required_column("to")
            .build()
    }

    pub fn from_args(args: &Arguments) -> Result<Self, DirectiveError> {
        Ok(Self {
            from: args.column("from")?.to_string(),
            to: args.column("to")?.to_string(),
        })
    }
}

impl Directive for Rename {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn execute(
        &mut self,
        mut batch: Vec<Row>,
        _ctx: &mut ExecutorContext,
    ) -> Result<Vec<Row>, DirectiveError> {
        for row in &mut batch {
            row.rename(&self.from, &self.to);
        }
        Ok(batch)
    }
}
