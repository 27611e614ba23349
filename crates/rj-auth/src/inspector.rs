use crate::{AlgorithmId, AuthError, DecodedToken, Result as AuthResult, TokenClaims, TokenHeader};

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use base64::engine::DecodePaddingMode;
use serde_json::{Map, Value};

/// JWT segments are unpadded base64url, but some issuers pad anyway.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a compact JWT without verifying its signature or expiry.
#[track_caller]
pub fn inspect(compact: &str) -> AuthResult<DecodedToken> {
    let segments: Vec<&str> = compact.trim().split('.').collect();
    let [header, payload, _signature] = segments.as_slice() else {
        return Err(AuthError::decode(format!(
            "expected 3 dot-separated segments, found {}",
            segments.len()
        )));
    };

    let header = decode_segment("header", header)?;
    let payload = decode_segment("payload", payload)?;

    let algorithm = header
        .get("alg")
        .and_then(Value::as_str)
        .filter(|alg| *alg != "none")
        .map(AlgorithmId::parse);
    let key_id = header.get("kid").and_then(Value::as_str).map(String::from);
    let issuer = payload.get("iss").and_then(Value::as_str).map(String::from);

    Ok(DecodedToken {
        header: TokenHeader { algorithm, key_id },
        claims: TokenClaims { issuer },
    })
}

#[track_caller]
fn decode_segment(name: &str, segment: &str) -> AuthResult<Map<String, Value>> {
    let bytes = SEGMENT_ENGINE
        .decode(segment)
        .map_err(|e| AuthError::decode(format!("{name} is not base64url: {e}")))?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AuthError::decode(format!("{name} is not a JSON object"))),
        Err(e) => Err(AuthError::decode(format!("{name} is not valid JSON: {e}"))),
    }
}
