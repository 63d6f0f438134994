//! Logging bootstrap
//!
//! Events go to the console and to a daily-rolling log file. The level
//! comes from `RUST_LOG` when set, otherwise from the configured level.
//! The returned guard must stay alive for the duration of the process or
//! buffered file output is lost.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Logging settings resolved from the application configuration
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Directory receiving rolling log files
    pub directory: String,
    /// Log file name prefix
    pub file_name: String,
    /// Default level filter when `RUST_LOG` is unset
    pub level: String,
    /// Also log to stdout
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "vitrine.log".to_string(),
            level: "info".to_string(),
            console: true,
        }
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &config.directory, &config.file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_layer = config.console.then(|| fmt::layer().with_target(true));
    let file_layer = fmt::layer().with_writer(file_writer).with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.directory, "logs");
        assert_eq!(config.file_name, "vitrine.log");
        assert_eq!(config.level, "info");
        assert!(config.console);
    }
}
