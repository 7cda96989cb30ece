//! Logger initialization for binaries.
//!
//! The library itself only emits through the `log` facade; this installs
//! `env_logger` as the backend.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "pixel_platformer::render=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter; falls back to `RUST_LOG`, then `info`.
    pub env_filter: Option<String>,
    /// ANSI coloring behavior.
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

/// Initializes the global logger once.
///
/// Subsequent calls are ignored.
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

        if builder.try_init().is_err() {
            // Another logger was installed by the host.
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging(LoggingConfig {
            env_filter: Some("warn".to_string()),
            ..LoggingConfig::default()
        });
        init_logging(LoggingConfig::default());
        assert!(INIT.is_completed());
    }
}
