pub use super::factories::{BatchFactory, RowFactory};

pub struct Factory;

impl Factory {
    pub fn row() -> RowFactory {
        RowFactory::new()
    }

    pub fn batch() -> BatchFactory {
        BatchFactory::new()
    }
}
