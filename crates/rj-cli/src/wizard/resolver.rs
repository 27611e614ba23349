//! Question flow that decides where the router gets its JWKS from.
//!
//! Symmetric (HMAC) secrets can be embedded in a local JWKS file; asymmetric
//! keys must come from a hosted endpoint because the wizard never generates
//! key pairs.

use crate::wizard::questions;
use crate::{Prompter, WizardError, WizardResult};

use rj_auth::{
    AlgorithmId, AuthError, Classification, DecodedToken, IssuerGuess, JwksUrl, SigningKey,
    classify, inspect,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};

/// Where the router gets its keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustSource {
    /// A JWKS endpoint the router fetches
    Hosted(JwksUrl),
    /// A shared secret to embed in a local JWKS file
    Local {
        signing_key: SigningKey,
        already_base64: bool,
    },
}

/// Terminal state of a successful resolver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub algorithm: AlgorithmId,
    pub classification: Classification,
    pub key_id: Option<String>,
    /// Set when the hosted URL came from the token issuer rather than the user
    pub issuer_guess: Option<IssuerGuess>,
    pub trust_source: TrustSource,
}

impl Resolution {
    pub fn is_local(&self) -> bool {
        matches!(self.trust_source, TrustSource::Local { .. })
    }
}

/// Runs the trust-source questions against a [`Prompter`]
pub struct TrustSourceResolver<'p, P: Prompter + ?Sized> {
    prompter: &'p mut P,
}

impl<'p, P: Prompter + ?Sized> TrustSourceResolver<'p, P> {
    pub fn new(prompter: &'p mut P) -> Self {
        Self { prompter }
    }

    pub fn resolve(mut self) -> WizardResult<Resolution> {
        let token = self.ask_for_sample_token()?;

        let algorithm = match token.as_ref().and_then(DecodedToken::algorithm) {
            Some(algorithm) => algorithm.clone(),
            None => self.ask_for_algorithm()?,
        };
        let key_id = token.as_ref().and_then(|t| t.key_id().map(String::from));

        let classification = classify(Some(&algorithm));
        info!("Algorithm {algorithm} classified as {:?}", classification.class);
        self.prompter.say(classification.explanation);

        let issuer_guess = token
            .as_ref()
            .and_then(|t| t.issuer_jwks_guess(classification.class));

        let trust_source = match issuer_guess {
            Some(ref guess) => {
                self.prompter.say(&format!(
                    "It appears you are using {}, so we've set your JWKS URL to {}",
                    guess.provider, guess.url
                ));
                TrustSource::Hosted(guess.url.clone())
            }
            None => self.resolve_without_guess(&algorithm, classification)?,
        };

        Ok(Resolution {
            algorithm,
            classification,
            key_id,
            issuer_guess,
            trust_source,
        })
    }

    fn ask_for_sample_token(&mut self) -> WizardResult<Option<DecodedToken>> {
        if !self
            .prompter
            .confirm(questions::HAS_SAMPLE_JWT, Some(false))?
        {
            return Ok(None);
        }

        let compact = self
            .prompter
            .text(questions::ENTER_SAMPLE_JWT, &validate_sample_jwt)?;
        let token = inspect(&compact)?;
        debug!(
            "Sample token: alg={:?}, kid={:?}, iss={:?}",
            token.algorithm().map(AlgorithmId::as_str),
            token.key_id(),
            token.claims.issuer
        );

        Ok(Some(token))
    }

    fn ask_for_algorithm(&mut self) -> WizardResult<AlgorithmId> {
        let choices = AlgorithmId::CHOICES;
        let labels: Vec<&str> = choices.iter().map(AlgorithmId::as_str).collect();

        let index = self.prompter.select(questions::CHOOSE_ALGORITHM, &labels)?;
        choices
            .get(index)
            .cloned()
            .ok_or_else(|| WizardError::choice_out_of_range(index, choices.len()))
    }

    fn resolve_without_guess(
        &mut self,
        algorithm: &AlgorithmId,
        classification: Classification,
    ) -> WizardResult<TrustSource> {
        self.prompter.say(questions::HOSTED_VS_LOCAL_ADVICE);
        let has_endpoint = self.prompter.confirm(questions::HAS_JWKS_ENDPOINT, None)?;

        if has_endpoint {
            return self.ask_for_endpoint().map(TrustSource::Hosted);
        }

        if !classification.is_symmetric() {
            return Err(WizardError::UnsupportedAsymmetricLocal {
                algorithm: algorithm.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.prompter.confirm(questions::HAS_SIGNING_KEY, None)? {
            return Err(WizardError::UnresolvedTrustSource {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let signing_key = SigningKey::new(self.prompter.secret(questions::ENTER_SIGNING_KEY)?);
        let already_base64 = self.prompter.confirm(questions::IS_KEY_BASE64, None)?;

        Ok(TrustSource::Local {
            signing_key,
            already_base64,
        })
    }

    fn ask_for_endpoint(&mut self) -> WizardResult<JwksUrl> {
        let answer = self
            .prompter
            .text(questions::ENTER_JWKS_ENDPOINT, &validate_jwks_url)?;

        Ok(JwksUrl::parse(&answer)?)
    }
}

/// Resolve a trust source with the given prompter
pub fn resolve<P: Prompter + ?Sized>(prompter: &mut P) -> WizardResult<Resolution> {
    TrustSourceResolver::new(prompter).resolve()
}

/// Prompt validator for the sample token
pub fn validate_sample_jwt(input: &str) -> Result<(), String> {
    match inspect(input) {
        Ok(_) => Ok(()),
        Err(AuthError::Decode { message, .. }) => Err(format!("Invalid JWT: {message}")),
        Err(other) => Err(other.to_string()),
    }
}

/// Prompt validator for the JWKS endpoint
pub fn validate_jwks_url(input: &str) -> Result<(), String> {
    match JwksUrl::parse(input) {
        Ok(_) => Ok(()),
        Err(AuthError::InvalidUrl { message, .. }) => Err(format!("Invalid URL: {message}")),
        Err(other) => Err(other.to_string()),
    }
}
