//! Configuration Loader
//!
//! Environment detection and source merging on top of the `config` crate.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, Environment, File};
use tracing::{debug, info};

use super::AppConfig;
use crate::error::Result;

const ENV_PREFIX: &str = "MEMBER_SEARCH";

#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> Result<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> Result<Arc<ConfigManager>> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> Result<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);
        let database_url = env::var("DATABASE_URL").ok();

        debug!(
            environment = environment,
            directory = %config_directory.display(),
            "Loading configuration"
        );

        let config = Self::build_config(&config_directory, environment, database_url)?;
        config.validate()?;

        info!(
            environment = environment,
            store = ?config.store.kind,
            bind_address = %config.web.bind_address,
            seed_enabled = config.seed.enabled,
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    /// Merge every source into an [`AppConfig`] without validating it
    pub(crate) fn build_config(
        config_directory: &Path,
        environment: &str,
        database_url: Option<String>,
    ) -> Result<AppConfig> {
        let mut defaults = AppConfig::default();
        defaults.seed.enabled = environment == "local";

        let mut builder = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::from(config_directory.join("default.toml")).required(false))
            .add_source(
                File::from(config_directory.join(format!("{environment}.toml"))).required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            builder = builder.set_override("database.url", url)?;
        }

        Ok(builder.build()?.try_deserialize::<AppConfig>()?)
    }

    /// `MEMBER_SEARCH_ENV`, then `APP_ENV`, then `development`
    pub fn detect_environment() -> String {
        env::var("MEMBER_SEARCH_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
    }

    fn default_config_directory() -> PathBuf {
        env::var("MEMBER_SEARCH_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
