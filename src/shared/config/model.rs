use serde::Deserialize;

/// Application settings. Every field carries a default so the crate works
/// as a plain library dependency with no config file on disk; a file (or
/// the ROWFORGE_CONFIG override) only has to name the values it changes.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rows per batch when the CLI slices an input stream.
    pub batch_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { batch_size: 1024 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub console_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            console_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("ROWFORGE_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
