use crate::{AuthError, Result as AuthResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use url::Url;

/// JWKS location exactly as it is written to the router config.
///
/// `Url` only checks that the text is absolute; the stored text is the trimmed
/// input, never the normalized form (host case, default port and trailing
/// slash are left alone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwksUrl {
    raw: String,
}

impl JwksUrl {
    #[track_caller]
    pub fn parse(input: &str) -> AuthResult<Self> {
        let raw = input.trim();
        Url::parse(raw).map_err(|e| AuthError::InvalidUrl {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> &str {
        self.raw
            .split_once(':')
            .map_or(self.raw.as_str(), |(scheme, _)| scheme)
    }
}

/// Generated URLs (`file://`) have no user-typed form to preserve.
impl From<Url> for JwksUrl {
    fn from(url: Url) -> Self {
        Self { raw: url.into() }
    }
}

impl fmt::Display for JwksUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
