use std::collections::HashMap;

use serde_json::Value;

/// Keyed scratch space scoped to one pipeline run. Directives that need to
/// carry small values across batch invocations park them here; the store is
/// dropped with the run and never touches disk.
#[derive(Debug, Default)]
pub struct TransientStore {
    entries: HashMap<String, Value>,
}

impl TransientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Integer read with a fallback, the common shape for counters.
    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        self.entries
            .get(key)
            .and_then(Value::as_i64)
            .unwrap_or(default)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-run state handed to every directive invocation: batch bookkeeping
/// for error reporting plus the transient store.
#[derive(Debug, Default)]
pub struct ExecutorContext {
    base_row: u64,
    batch_index: u64,
    store: TransientStore,
}

impl ExecutorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute input-row index for an offset into the current batch.
    /// Indices count from zero across the whole run, not per batch.
    pub fn row_index(&self, offset: usize) -> u64 {
        self.base_row + offset as u64
    }

    /// Zero-based index of the batch currently being processed.
    pub fn batch_index(&self) -> u64 {
        self.batch_index
    }

    pub fn store(&self) -> &TransientStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TransientStore {
        &mut self.store
    }

    /// Called by the executor after each batch completes.
    pub(crate) fn advance_batch(&mut self, rows_in_batch: usize) {
        self.base_row += rows_in_batch as u64;
        self.batch_index += 1;
    }
}
