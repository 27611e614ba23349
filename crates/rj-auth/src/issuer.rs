use crate::JwksUrl;

use std::fmt;

use log::debug;

/// Identity providers whose JWKS location can be derived from the issuer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityProvider {
    Auth0,
    Okta,
}

impl IdentityProvider {
    /// Checked in order, first match wins
    const MATCHERS: [(IdentityProvider, &'static str, &'static str); 2] = [
        (IdentityProvider::Auth0, "auth0", ".well-known/jwks.json"),
        // https://developer.okta.com/docs/guides/validate-access-tokens/
        (IdentityProvider::Okta, "okta", "/v1/keys"),
    ];
}

impl fmt::Display for IdentityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth0 => f.write_str("Auth0"),
            Self::Okta => f.write_str("Okta"),
        }
    }
}

/// Best-effort JWKS endpoint derived from a token issuer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerGuess {
    pub provider: IdentityProvider,
    /// `issuer + suffix`, verbatim
    pub url: JwksUrl,
}

impl IssuerGuess {
    /// Derive a JWKS URL by appending the provider's well-known suffix to the
    /// issuer text as-is. Returns `None` when no provider matches or the
    /// result is not an absolute URL.
    pub fn from_issuer(issuer: &str) -> Option<Self> {
        let (provider, suffix) = IdentityProvider::MATCHERS
            .iter()
            .find(|(_, needle, _)| issuer.contains(needle))
            .map(|(provider, _, suffix)| (*provider, *suffix))?;

        let candidate = format!("{issuer}{suffix}");
        match JwksUrl::parse(&candidate) {
            Ok(url) => Some(Self { provider, url }),
            Err(e) => {
                debug!("Discarding {provider} JWKS guess '{candidate}': {e}");
                None
            }
        }
    }
}
