//! Logging initialisation.
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a
//! console `fmt` layer. `RUST_LOG` wins over the configured level.

use crate::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Builds the filter, preferring `RUST_LOG` when it is set.
    pub fn env_filter(&self) -> StorageResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                StorageError::configuration(format!("Invalid log level '{}': {}", self.level, e))
            }),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails if the level is not a valid filter directive or a subscriber
/// is already installed.
pub fn init_tracing(config: &LoggingConfig) -> StorageResult<()> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    installed.map_err(|e| StorageError::internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level":"debug","format":"json"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
