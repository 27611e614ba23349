use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid JWT: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot build an 'oct' key for {algorithm}: only HMAC algorithms use a shared secret {location}")]
    NonSymmetricJwk {
        algorithm: String,
        location: ErrorLocation,
    },

    #[error("Cannot build a file URL for {path}: path must be absolute {location}")]
    FileUrl {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("JWKS serialization failed: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("IO error writing {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Create a decode error for a malformed token
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        AuthError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
