pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{EngineConfig, LoggingConfig, Settings};
