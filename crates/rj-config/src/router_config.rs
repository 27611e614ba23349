//! Router configuration file carrying the JWKS trust source.
//!
//! Only `authentication.experimental.jwt` is ever written. In
//! [`EmitMode::MergeList`] the new `authentication` key replaces the old
//! one wholesale: sibling settings under `authentication` are not kept.

use crate::{ConfigError, ConfigErrorResult};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use log::{debug, info};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

const AUTHENTICATION_KEY: &str = "authentication";

/// How the JWKS reference is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// `create-config`: fresh document, singular `jwks_url`
    Overwrite,
    /// `configure`: merged into an existing document, `jwks_urls` list
    MergeList,
}

#[derive(Serialize)]
struct Authentication {
    experimental: Experimental,
}

#[derive(Serialize)]
struct Experimental {
    jwt: JwtSettings,
}

#[derive(Serialize)]
struct JwtSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    jwks_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jwks_urls: Option<Vec<String>>,
}

impl Authentication {
    fn for_mode(mode: EmitMode, jwks_url: &str) -> Self {
        let url = jwks_url.to_string();
        let jwt = match mode {
            EmitMode::Overwrite => JwtSettings {
                jwks_url: Some(url),
                jwks_urls: None,
            },
            EmitMode::MergeList => JwtSettings {
                jwks_url: None,
                jwks_urls: Some(vec![url]),
            },
        };

        Self {
            experimental: Experimental { jwt },
        }
    }
}

/// A router configuration document ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    document: Mapping,
}

impl RouterConfig {
    /// Load an existing router config as a YAML mapping.
    ///
    /// A missing file is `ConfigNotFound`; an empty file is an empty mapping.
    #[track_caller]
    pub fn load_existing(path: &Path) -> ConfigErrorResult<Mapping> {
        if !path.is_file() {
            return Err(ConfigError::config_not_found(path));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let parsed: Value = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Yaml {
            path: path.to_path_buf(),
            source: e,
        })?;

        match parsed {
            Value::Mapping(mapping) => {
                debug!("Loaded {} top-level keys from {}", mapping.len(), path.display());
                Ok(mapping)
            }
            Value::Null => Ok(Mapping::new()),
            _ => Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Build the document for `mode`.
    ///
    /// `existing` is merged only in [`EmitMode::MergeList`]; `Overwrite`
    /// always starts from an empty document. `jwks_url` is written verbatim.
    #[track_caller]
    pub fn emit(
        mode: EmitMode,
        jwks_url: &str,
        existing: Option<Mapping>,
    ) -> ConfigErrorResult<Self> {
        let mut document = match mode {
            EmitMode::Overwrite => Mapping::new(),
            EmitMode::MergeList => existing.unwrap_or_default(),
        };

        let authentication = serde_yaml::to_value(Authentication::for_mode(mode, jwks_url))
            .map_err(ConfigError::from_serde_error)?;

        if document
            .insert(Value::from(AUTHENTICATION_KEY), authentication)
            .is_some()
        {
            debug!("Replaced existing '{AUTHENTICATION_KEY}' section");
        }

        Ok(Self { document })
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.document
    }

    #[track_caller]
    pub fn to_yaml(&self) -> ConfigErrorResult<String> {
        serde_yaml::to_string(&self.document).map_err(ConfigError::from_serde_error)
    }

    /// Write the document to `path`, replacing any existing file.
    #[track_caller]
    pub fn write(&self, path: &Path) -> ConfigErrorResult<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Wrote router config to {}", path.display());
        Ok(())
    }
}
