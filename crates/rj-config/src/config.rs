use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    LoggingConfig, OutputConfig,
};

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

/// Settings for the wizard itself (not the router config it produces)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RJ_CONFIG_DIR env var, else use ./.router-jwks/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply RJ_* environment variable overrides
    ///
    /// The directory is never created. Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RJ_CONFIG_DIR env var > ./.router-jwks/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()?;
        self.output.validate()?;
        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(file)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("<stderr>")
        );
        info!(
            "  output: jwks={}, router_config={}",
            self.output.jwks_file, self.output.router_config_file
        );
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        Self::apply_env_parse("RJ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RJ_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RJ_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("RJ_LOG_DIR", &mut self.logging.dir);

        // Output
        Self::apply_env_string("RJ_OUTPUT_JWKS_FILE", &mut self.output.jwks_file);
        Self::apply_env_string(
            "RJ_OUTPUT_ROUTER_CONFIG_FILE",
            &mut self.output.router_config_file,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        match std::env::var(var_name).map(|val| val.parse::<T>()) {
            Ok(Ok(parsed)) => *target = parsed,
            Ok(Err(_)) => debug!("Ignoring unparseable {var_name}"),
            Err(_) => {}
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
