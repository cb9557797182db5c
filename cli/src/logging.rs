use std::io;

use incometax_config::{DEFAULT_LOG_LEVEL, LoggingConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Log lines go to stderr, never stdout.
///
/// The filter comes from the configuration alone; the process environment is not read.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = build_filter(&config.level);
    let layer = fmt::layer().with_ansi(config.ansi).with_writer(io::stderr);

    if config.timestamps {
        tracing_subscriber::registry()
            .with(layer)
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(layer.without_time())
            .with(env_filter)
            .init();
    }
}

/// Configured level, or `info` when it does not parse.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
