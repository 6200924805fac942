use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config::model::{Settings, load_settings};

/// Process-wide settings, loaded once on first access. A missing config
/// file falls back to the built-in defaults; a malformed one is fatal.
pub static CONFIG: Lazy<Arc<Settings>> =
    Lazy::new(|| Arc::new(load_settings().expect("configuration file is malformed")));
