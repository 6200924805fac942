use serde_json::Value;

/// One record moving through a pipeline: an ordered list of named column
/// values. Column order is part of the row's identity, so writes replace
/// in place and renames keep their position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Builder-style insert, mostly for constructing rows inline.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value.into());
        self
    }

    /// Value of the named column, if present.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Set a column, replacing an existing value or appending a new column.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((name.to_string(), value)),
        }
    }

    /// Remove a column by name, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.columns.iter().position(|(n, _)| n == name)?;
        Some(self.columns.remove(idx).1)
    }

    /// Rename a column in place. Returns false when the column is absent.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        match self.columns.iter_mut().find(|(n, _)| n == from) {
            Some((name, _)) => {
                *name = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Column names in row order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Name/value pairs in row order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The cell coerced to text, the form quantity parsing consumes.
    /// Strings pass through as written; numbers and booleans use their
    /// display form; null cells and missing columns are both `None`.
    pub fn value_as_string(&self, name: &str) -> Option<String> {
        match self.value(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Build a row from a JSON object. Returns `None` for non-objects.
    pub fn from_json_object(value: &Value) -> Option<Row> {
        let object = value.as_object()?;
        let mut row = Row::new();
        for (name, value) in object {
            row.set(name, value.clone());
        }
        Some(row)
    }

    /// Render the row as a JSON object.
    pub fn to_json_object(&self) -> Value {
        let mut object = serde_json::Map::new();
        for (name, value) in &self.columns {
            object.insert(name.clone(), value.clone());
        }
        Value::Object(object)
    }
}
