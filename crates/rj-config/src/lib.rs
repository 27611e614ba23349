mod config;
mod error;
mod log_level;
mod logging_config;
mod output_config;
mod router_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use output_config::OutputConfig;
pub use router_config::{EmitMode, RouterConfig};

pub const CONFIG_DIR_ENV: &str = "RJ_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIRECTORY: &str = ".router-jwks";
pub const CONFIG_FILENAME: &str = "config.toml";
pub const DEFAULT_JWKS_FILENAME: &str = "jwks.json";
pub const DEFAULT_ROUTER_CONFIG_FILENAME: &str = "router.yaml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
