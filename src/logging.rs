use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::CONFIG;
use tracing::info;

pub fn init() -> anyhow::Result<()> {
    let cfg = &CONFIG.logging;
    let console_filter = cfg
        .console_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;
    let file_filter = cfg
        .file_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;

    // Row output goes to stdout, so diagnostics stay on stderr.
    let console_layer = fmt::layer()
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, "rowforge.log");
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized");
    Ok(())
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive("rowforge=debug".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // sends logs to captured test output
            .init();
    });
}
