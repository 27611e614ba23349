use crate::{AlgorithmClass, AlgorithmId, IssuerGuess};

/// Header fields the wizard reads from a sample token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenHeader {
    /// `alg`; `None` when absent or `"none"`
    pub algorithm: Option<AlgorithmId>,
    /// `kid`
    pub key_id: Option<String>,
}

/// Payload claims the wizard reads. Everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenClaims {
    /// `iss`
    pub issuer: Option<String>,
}

/// A compact JWT split into header and payload. The signature is never checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedToken {
    pub header: TokenHeader,
    pub claims: TokenClaims,
}

impl DecodedToken {
    pub fn algorithm(&self) -> Option<&AlgorithmId> {
        self.header.algorithm.as_ref()
    }

    pub fn key_id(&self) -> Option<&str> {
        self.header.key_id.as_deref()
    }

    /// Guess a hosted JWKS endpoint from the issuer claim.
    ///
    /// Only asymmetric (or unknown) algorithms get a guess: an HMAC secret is
    /// never published by an identity provider.
    pub fn issuer_jwks_guess(&self, class: AlgorithmClass) -> Option<IssuerGuess> {
        if class.is_symmetric() {
            return None;
        }

        self.claims.issuer.as_deref().and_then(IssuerGuess::from_issuer)
    }
}
