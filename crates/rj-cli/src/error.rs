use rj_auth::AuthError;
use rj_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Prompt returned choice {index}, but only {count} choices were offered {location}")]
    ChoiceOutOfRange {
        index: usize,
        count: usize,
        location: ErrorLocation,
    },

    #[error(
        "To create a valid JWKS file for a symmetric key, you will need either a JWKS endpoint or token signing key. {location}"
    )]
    UnresolvedTrustSource { location: ErrorLocation },

    #[error(
        "Asymmetric keys ({algorithm}) using a local JWKS file are not currently supported by this tool, however it is possible to craft one manually {location}"
    )]
    UnsupportedAsymmetricLocal {
        algorithm: String,
        location: ErrorLocation,
    },

    #[error("Prompt failed: {source} {location}")]
    Prompt {
        #[source]
        source: dialoguer::Error,
        location: ErrorLocation,
    },

    #[error("Cannot determine current working directory: {source} {location}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logging error: {message} {location}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WizardError {
    #[track_caller]
    pub fn choice_out_of_range(index: usize, count: usize) -> Self {
        WizardError::ChoiceOutOfRange {
            index,
            count,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        WizardError::Logging {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert a dialoguer error with context
    #[track_caller]
    pub fn from_prompt(err: dialoguer::Error) -> Self {
        WizardError::Prompt {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<dialoguer::Error> for WizardError {
    #[track_caller]
    fn from(err: dialoguer::Error) -> Self {
        WizardError::from_prompt(err)
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;
