//! Configuration Loader
//!
//! Environment-aware loading: built-in defaults, then `lexflow.yaml`, then
//! `lexflow.<environment>.yaml`, then `LEXFLOW__*` environment variables.
//! Both files are optional.

use super::error::{ConfigResult, ConfigurationError};
use super::EngineConfig;
use crate::error::Result;
use crate::logging::log_error;
use crate::process::ProcessCatalog;
use ::config::{Config, Environment, File};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const BASE_FILE_STEM: &str = "lexflow";
const ENV_PREFIX: &str = "LEXFLOW";

/// Loaded configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: EngineConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> ConfigResult<Arc<ConfigManager>> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> ConfigResult<Arc<ConfigManager>> {
        Self::load_with_overrides(config_dir, environment, None)
    }

    /// Load with an explicit variable map standing in for the process environment.
    ///
    /// Passing `None` reads the real environment. Tests use a map to exercise
    /// overrides without touching global state.
    pub fn load_with_overrides(
        config_dir: Option<PathBuf>,
        environment: &str,
        variables: Option<HashMap<String, String>>,
    ) -> ConfigResult<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let defaults = Config::try_from(&EngineConfig::default())
            .map_err(|e| ConfigurationError::load_error(environment, e))?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(config_directory.join(format!("{BASE_FILE_STEM}.yaml"))).required(false),
            )
            .add_source(
                File::from(config_directory.join(format!("{BASE_FILE_STEM}.{environment}.yaml")))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("urgency.flagged_statuses")
                    .try_parsing(true)
                    .source(variables),
            )
            .build()
            .map_err(|e| ConfigurationError::load_error(environment, e))?;

        let config: EngineConfig = settings
            .try_deserialize()
            .map_err(|e| ConfigurationError::load_error(environment, e))?;

        config.validate()?;

        info!(
            environment = environment,
            config_directory = %config_directory.display(),
            custom_catalog = config.catalog.path.is_some(),
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    /// Wrap an already built configuration, validating it first
    pub fn from_config(config: EngineConfig, environment: &str) -> ConfigResult<ConfigManager> {
        config.validate()?;
        Ok(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory: Self::default_config_directory(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    /// Resolved path of the replacement catalog, if one is configured
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.config.catalog.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                self.config_directory.join(path)
            }
        })
    }

    /// Build the catalog this configuration asks for
    pub fn catalog(&self) -> Result<ProcessCatalog> {
        let Some(path) = self.catalog_path() else {
            return Ok(ProcessCatalog::builtin());
        };

        ProcessCatalog::from_yaml_file(&path).map_err(|e| {
            log_error(
                "config",
                "load_catalog",
                &e.to_string(),
                Some(&path.display().to_string()),
            );
            e.into()
        })
    }

    /// Detect the current environment from environment variables
    pub fn detect_environment() -> String {
        env::var("LEXFLOW_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
    }

    fn default_config_directory() -> PathBuf {
        env::var("LEXFLOW_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }
}
