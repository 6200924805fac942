pub mod batch_factory;
pub mod row_factory;

pub use batch_factory::BatchFactory;
pub use row_factory::RowFactory;

#[cfg(test)]
mod batch_factory_test;
#[cfg(test)]
mod row_factory_test;
