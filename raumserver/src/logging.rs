//! Logging setup for the raumserver binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary (or to tests that want output).

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LoggingMode {
    /// No output
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),
}

/// Initialize logging with the specified mode.
///
/// `level` overrides the filter when given. Otherwise `RAUMSERVER_LOG_LEVEL`
/// is used, then `RUST_LOG`, then the mode's default (`info` for
/// development, `debug` for debug).
///
/// # Examples
///
/// ```rust,ignore
/// raumserver::logging::init_logging(LoggingMode::Development, None)?;
/// raumserver::logging::init_logging(LoggingMode::Debug, Some("raumserver=trace"))?;
/// ```
pub fn init_logging(mode: LoggingMode, level: Option<&str>) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let filter = create_env_filter(level, "info")?;

            Registry::default()
                .with(fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact())
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let filter = create_env_filter(level, "debug")?;

            Registry::default()
                .with(fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true))
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

fn create_env_filter(level: Option<&str>, default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = match level {
        Some(level) => level.to_string(),
        None => std::env::var("RAUMSERVER_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| default_level.to_string()),
    };

    EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidFilter(directive, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent, None).is_ok());
    }

    #[test]
    fn test_explicit_level_wins() {
        let filter = create_env_filter(Some("raumserver=trace"), "info").unwrap();
        assert!(filter.to_string().contains("raumserver=trace"));
    }

    #[test]
    fn test_invalid_filter() {
        let result = create_env_filter(Some("raumserver=loud"), "info");
        assert!(matches!(result, Err(LoggingError::InvalidFilter(..))));
    }
}
