pub mod core;
pub mod directive;
pub mod errors;
pub mod pipeline;

pub use errors::*;
