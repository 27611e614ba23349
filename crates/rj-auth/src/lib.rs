pub mod algorithm;
pub mod error;
pub mod inspector;
pub mod issuer;
pub mod jwks;
pub mod jwks_url;
pub mod token;

pub use algorithm::{AlgorithmClass, AlgorithmId, Classification, classify};
pub use error::{AuthError, Result};
pub use inspector::inspect;
pub use issuer::{IdentityProvider, IssuerGuess};
pub use jwks::{Jwk, Jwks, SigningKey, jwks_file_url, synthesize};
pub use jwks_url::JwksUrl;
pub use token::{DecodedToken, TokenClaims, TokenHeader};

#[cfg(test)]
mod tests;
