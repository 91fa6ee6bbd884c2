//! Session Tokens
//!
//! `<base64url(claims json)>.<base64url(blake3 keyed mac)>`. The MAC key is
//! derived from the configured secret.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

const KEY_CONTEXT: &str = "globomantics 2024 session token mac";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account email
    pub sub: String,
    pub name: String,
    pub role: String,
    /// Not before, unix seconds
    pub nbf: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Malformed,
    BadSignature,
    NotYetValid,
    Expired,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "malformed token"),
            TokenError::BadSignature => write!(f, "bad token signature"),
            TokenError::NotYetValid => write!(f, "token not yet valid"),
            TokenError::Expired => write!(f, "token expired"),
        }
    }
}

pub struct TokenSigner {
    key: [u8; 32],
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
        }
    }

    pub fn sign(&self, claims: &Claims) -> DomainResult<String> {
        let payload = serde_json::to_vec(claims).map_err(|e| DomainError::Internal(e.to_string()))?;
        let mac = blake3::keyed_hash(&self.key, &payload);
        Ok(format!("{}.{}", URL_SAFE_NO_PAD.encode(&payload), URL_SAFE_NO_PAD.encode(mac.as_bytes())))
    }

    /// Checks signature, then the validity window against `now` (unix seconds)
    pub fn verify(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let (payload_b64, mac_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
        let payload = URL_SAFE_NO_PAD.decode(payload_b64).map_err(|_| TokenError::Malformed)?;
        let mac_bytes: [u8; 32] = URL_SAFE_NO_PAD
            .decode(mac_b64)
            .map_err(|_| TokenError::Malformed)?
            .try_into()
            .map_err(|_| TokenError::Malformed)?;

        // blake3::Hash equality is constant time
        if blake3::Hash::from_bytes(mac_bytes) != blake3::keyed_hash(&self.key, &payload) {
            return Err(TokenError::BadSignature);
        }

        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;
        if now < claims.nbf {
            return Err(TokenError::NotYetValid);
        }
        if now >= claims.exp {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}
