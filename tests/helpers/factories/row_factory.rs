use serde_json::{Value, json};

use crate::engine::core::Row;

/// Builds test rows with plausible quantity columns prefilled.
pub struct RowFactory {
    columns: Vec<(String, Value)>,
}

impl RowFactory {
    pub fn new() -> Self {
        Self {
            columns: vec![
                ("size".into(), json!("1KB")),
                ("time".into(), json!("1s")),
            ],
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((name.to_string(), value)),
        }
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.columns.retain(|(n, _)| n != name);
        self
    }

    pub fn create(self) -> Row {
        let mut row = Row::new();
        for (name, value) in self.columns {
            row.set(&name, value);
        }
        row
    }

    pub fn create_list(self, count: usize) -> Vec<Row> {
        let row = self.create();
        (0..count).map(|_| row.clone()).collect()
    }
}
