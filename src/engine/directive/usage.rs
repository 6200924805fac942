/// Kind of a positional directive argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// A column reference, written `:name` in recipes.
    Column,
    /// Free text, written bare or quoted in recipes.
    Text,
}

impl ArgKind {
    pub const fn describe(self) -> &'static str {
        match self {
            ArgKind::Column => "column reference",
            ArgKind::Text => "text",
        }
    }
}

/// One declared positional argument.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
    pub default: Option<&'static str>,
}

/// A directive's positional argument declaration: its recipe name plus the
/// ordered argument specs tokens are bound against. Optional arguments sit
/// after all required ones and fall back to their declared defaults.
#[derive(Debug, Clone)]
pub struct UsageDefinition {
    name: &'static str,
    args: Vec<ArgSpec>,
}

impl UsageDefinition {
    pub fn builder(name: &'static str) -> UsageBuilder {
        UsageBuilder {
            name,
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }
}

pub struct UsageBuilder {
    name: &'static str,
    args: Vec<ArgSpec>,
}

impl UsageBuilder {
    pub fn required_column(mut self, name: &'static str) -> Self {
        self.args.push(ArgSpec {
            name,
            kind: ArgKind::Column,
            required: true,
            default: None,
        });
        self
    }

    pub fn required_text(mut self, name: &'static str) -> Self {
        self.args.push(ArgSpec {
            name,
            kind: ArgKind::Text,
            required: true,
            default: None,
        });
        self
    }

    pub fn optional_text(mut self, name: &'static str, default: &'static str) -> Self {
        self.args.push(ArgSpec {
            name,
            kind: ArgKind::Text,
            required: false,
            default: Some(default),
        });
        self
    }

    pub fn build(self) -> UsageDefinition {
        UsageDefinition {
            name: self.name,
            args: self.args,
        }
    }
}
