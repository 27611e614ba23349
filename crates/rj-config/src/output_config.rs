use crate::{ConfigError, ConfigErrorResult, DEFAULT_JWKS_FILENAME, DEFAULT_ROUTER_CONFIG_FILENAME};

use serde::Deserialize;

/// Names of the files the wizard writes into the working directory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub jwks_file: String,
    /// Used by `create-config`, and by `configure` when no `--config` is given
    pub router_config_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            jwks_file: String::from(DEFAULT_JWKS_FILENAME),
            router_config_file: String::from(DEFAULT_ROUTER_CONFIG_FILENAME),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_file_name("output.jwks_file", &self.jwks_file)?;
        Self::validate_file_name("output.router_config_file", &self.router_config_file)?;
        Ok(())
    }

    fn validate_file_name(field: &str, value: &str) -> ConfigErrorResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::output(format!("{field} cannot be empty")));
        }

        if value.contains(['/', '\\']) || value == "." || value == ".." {
            return Err(ConfigError::output(format!(
                "{field} must be a plain file name, got '{value}'"
            )));
        }

        Ok(())
    }
}
