//! Logger setup.
//!
//! GL diagnostics are emitted through the `log` facade; `env_logger` writes
//! them to stderr.

use std::sync::Once;

/// `env_filter` uses the `env_logger` filter syntax, e.g. "info" or
/// "backend=debug".
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.target(env_logger::Target::Stderr);

        // another logger may already be installed (e.g. by a test harness)
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig {
            env_filter: Some("debug".to_string()),
            ..Default::default()
        });
        init_logging(LoggingConfig::default());
        log::info!("still alive");
    }
}
