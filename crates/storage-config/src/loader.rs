//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use std::sync::Arc;
use storage_core::StorageError;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Environment variable prefix for overrides (`STORAGE_DATABASE__URL`, ...).
pub const ENV_PREFIX: &str = "STORAGE";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `STORAGE_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, StorageError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, StorageError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), StorageError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, StorageError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(format!("{ENV_PREFIX}_ENVIRONMENT"))
            .unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let mut app_config = builder
            .build()
            .and_then(Config::try_deserialize::<AppConfig>)
            .map_err(config_error_to_storage_error)?;

        app_config.app.environment = environment;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    fn validate_config(config: &AppConfig) -> Result<(), StorageError> {
        if config.database.url.is_empty() {
            return Err(StorageError::configuration("Database URL is required"));
        }

        if config.database.max_connections == 0 {
            return Err(StorageError::configuration(
                "database.max_connections must be at least 1",
            ));
        }

        if config.database.min_connections > config.database.max_connections {
            return Err(StorageError::configuration(
                "database.min_connections exceeds database.max_connections",
            ));
        }

        Ok(())
    }
}

fn config_error_to_storage_error(err: ConfigError) -> StorageError {
    StorageError::configuration(err.to_string())
}
