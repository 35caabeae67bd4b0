//! Tracing subscriber setup.

use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use vidscribe_error::{ConfigError, VidscribeError, VidscribeResult};

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for one-shot commands
    Stderr,
    /// Append to a file, so the TUI screen stays clean
    File(PathBuf),
}

impl LogTarget {
    /// `<cache_dir>/vidscribe/vidscribe.log`, falling back to the working
    /// directory when the platform has no cache directory.
    pub fn default_file() -> Self {
        let dir = dirs::cache_dir()
            .map(|d| d.join("vidscribe"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::File(dir.join("vidscribe.log"))
    }
}

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g., "info", "debug"), used when `RUST_LOG` is unset
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
    /// Output destination
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Create a configuration logging at `info` to stderr.
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            target: LogTarget::Stderr,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Set the output destination.
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns a configuration error if the filter is invalid, the log file
/// cannot be opened, or a subscriber is already installed.
pub fn init_observability(config: &ObservabilityConfig) -> VidscribeResult<()> {
    build_subscriber(config)?
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install log subscriber: {}", e)))?;

    Ok(())
}

/// Run `f` with a subscriber built from `config` active on this thread only.
///
/// Used for startup work, such as loading configuration, that happens before
/// the global subscriber can be installed.
///
/// # Errors
///
/// Returns a configuration error if the subscriber cannot be built.
pub fn with_scoped_observability<T>(
    config: &ObservabilityConfig,
    f: impl FnOnce() -> T,
) -> VidscribeResult<T> {
    let subscriber = build_subscriber(config)?;
    Ok(tracing::subscriber::with_default(subscriber, f))
}

fn build_subscriber(
    config: &ObservabilityConfig,
) -> VidscribeResult<impl tracing::Subscriber + Send + Sync + 'static> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ConfigError::new(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = match &config.target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            if config.json_logs {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
        LogTarget::File(path) => {
            let file = Mutex::new(open_log_file(path)?);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            if config.json_logs {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
    };

    Ok(tracing_subscriber::registry().with(env_filter).with(fmt_layer))
}

fn open_log_file(path: &Path) -> VidscribeResult<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            VidscribeError::from(ConfigError::new(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            VidscribeError::from(ConfigError::new(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VidscribeConfig;

    #[test]
    fn test_scoped_logging_captures_config_loading() {
        let path = std::env::temp_dir()
            .join(format!("vidscribe-log-test-{}", std::process::id()))
            .join("startup.log");
        let _ = std::fs::remove_file(&path);

        let config = ObservabilityConfig::new()
            .with_log_level("debug")
            .with_target(LogTarget::File(path.clone()));
        let loaded = with_scoped_observability(&config, || VidscribeConfig::load(None))
            .expect("subscriber");

        assert!(loaded.is_ok());
        let logs = std::fs::read_to_string(&path).expect("log file written");
        assert!(logs.contains("Loading configuration"));
    }
}
