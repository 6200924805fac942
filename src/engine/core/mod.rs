pub mod context;
pub mod row;

pub use context::{ExecutorContext, TransientStore};
pub use row::Row;

#[cfg(test)]
mod context_test;
