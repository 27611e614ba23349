use crate::{AlgorithmId, AuthError, JwksUrl, Result as AuthResult};

use std::fmt;
use std::panic::Location;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use error_location::ErrorLocation;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shared HMAC secret as typed by the user. Never printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey(String);

impl SigningKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

/// Single JSON Web Key of type `oct`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub alg: String,
    /// Base64 of the shared secret
    pub k: String,
    #[serde(rename = "use")]
    pub key_use: String,
    pub kty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    /// Serialize as compact JSON
    #[track_caller]
    pub fn to_json(&self) -> AuthResult<String> {
        serde_json::to_string(self).map_err(|e| AuthError::Serialize {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Write the set as the sole content of `path`, replacing any existing file.
    #[track_caller]
    pub fn write(&self, path: &Path) -> AuthResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| AuthError::Io {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Wrote JWKS to {}", path.display());
        Ok(())
    }
}

/// Build a one-key JWKS around a shared HMAC secret.
///
/// The secret is base64-encoded unless `already_base64` says it already is.
/// `kid` is left out of the key entirely when `key_id` is `None`.
#[track_caller]
pub fn synthesize(
    algorithm: &AlgorithmId,
    key_id: Option<&str>,
    signing_key: &SigningKey,
    already_base64: bool,
) -> AuthResult<Jwks> {
    if !algorithm.class().is_symmetric() {
        return Err(AuthError::NonSymmetricJwk {
            algorithm: algorithm.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let k = if already_base64 {
        signing_key.expose().to_string()
    } else {
        STANDARD.encode(signing_key.expose().as_bytes())
    };

    debug!(
        "Synthesized {} key (kid: {})",
        algorithm,
        key_id.unwrap_or("<none>")
    );

    Ok(Jwks {
        keys: vec![Jwk {
            alg: algorithm.to_string(),
            k,
            key_use: String::from("sig"),
            kty: String::from("oct"),
            kid: key_id.map(String::from),
        }],
    })
}

/// `file://` URL for a JWKS file named `file_name` inside `working_dir`.
#[track_caller]
pub fn jwks_file_url(working_dir: &Path, file_name: &str) -> AuthResult<JwksUrl> {
    let path = working_dir.join(file_name);
    Url::from_file_path(&path)
        .map(JwksUrl::from)
        .map_err(|()| AuthError::FileUrl {
            path,
            location: ErrorLocation::from(Location::caller()),
        })
}
