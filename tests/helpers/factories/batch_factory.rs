use serde_json::json;

use crate::engine::core::Row;

/// Builds batches of size/time quantity rows for aggregation tests.
pub struct BatchFactory {
    size_column: String,
    time_column: String,
    pairs: Vec<(String, String)>,
}

impl BatchFactory {
    pub fn new() -> Self {
        Self {
            size_column: "size".to_string(),
            time_column: "time".to_string(),
            pairs: Vec::new(),
        }
    }

    /// Override the column names rows are built with.
    pub fn columns(mut self, size_column: &str, time_column: &str) -> Self {
        self.size_column = size_column.to_string();
        self.time_column = time_column.to_string();
        self
    }

    /// Append one row with the given size and time literals.
    pub fn row(mut self, size: &str, time: &str) -> Self {
        self.pairs.push((size.to_string(), time.to_string()));
        self
    }

    pub fn create(self) -> Vec<Row> {
        self.pairs
            .into_iter()
            .map(|(size, time)| {
                let mut row = Row::new();
                row.set(&self.size_column, json!(size));
                row.set(&self.time_column, json!(time));
                row
            })
            .collect()
    }
}
