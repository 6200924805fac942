use std::collections::HashMap;

use tracing::debug;

use crate::engine::directive::aggregate_stats::AggregateStats;
use crate::engine::directive::args::Arguments;
use crate::engine::directive::drop::DropColumn;
use crate::engine::directive::rename::Rename;
use crate::engine::directive::traits::Directive;
use crate::engine::directive::usage::UsageDefinition;
use crate::engine::errors::DirectiveError;

type Factory = fn(&Arguments) -> Result<Box<dyn Directive>, DirectiveError>;

/// One registered directive: its usage declaration plus a constructor.
pub struct Registration {
    usage: UsageDefinition,
    factory: Factory,
}

impl Registration {
    pub fn usage(&self) -> &UsageDefinition {
        &self.usage
    }

    /// Build a fresh instance for one pipeline run.
    pub fn instantiate(&self, args: &Arguments) -> Result<Box<dyn Directive>, DirectiveError> {
        (self.factory)(args)
    }
}

/// Name-keyed lookup of the directives a recipe may use.
pub struct DirectiveRegistry {
    entries: HashMap<&'static str, Registration>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// A registry preloaded with the built-in directives.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(AggregateStats::usage(), |args| {
            Ok(Box::new(AggregateStats::from_args(args)?))
        });
        registry.register(Rename::usage(), |args| Ok(Box::new(Rename::from_args(args)?)));
        registry.register(DropColumn::usage(), |args| {
            Ok(Box::new(DropColumn::from_args(args)?))
        });
        registry
    }

    /// Register a directive under its usage name. A later registration with
    /// the same name replaces the earlier one, so callers can shadow a
    /// built-in.
    pub fn register(&mut self, usage: UsageDefinition, factory: Factory) {
        debug!(target: "rowforge::registry", directive = usage.name(), "Registered directive");
        self.entries.insert(usage.name(), Registration { usage, factory });
    }

    pub fn get(&self, name: &str) -> Option<&Registration> {
        self.entries.get(name)
    }

    /// Registered names, sorted for stable listings.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
