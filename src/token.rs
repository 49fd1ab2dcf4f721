//! Signed bearer tokens
//!
//! A token is `b64url(payload) "." b64url(tag)`, where the payload is the
//! JSON claims object and the tag is HMAC-SHA256 over the encoded payload.
//! Tokens are signed, not encrypted: anyone holding one can read the
//! username inside it, but cannot alter it without the signing secret.
//! There is no expiry field and no server-side session table.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as B64URL, Engine};
use thiserror::Error;

use crate::crypto::{hmac_tag, hmac_verify};
use crate::error::ApiError;
use crate::types::TokenClaims;

/// Mixed into every tag so tokens cannot be confused with other values
/// signed under the same secret.
const TOKEN_CONTEXT: &[u8] = b"user-auth";

const SEPARATOR: char = '.';

/// Why a token was rejected. Only used for logging; callers see
/// [`ApiError::InvalidToken`].
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not of the form payload.tag")]
    Malformed,
    #[error("base64 decode error: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("integrity tag mismatch")]
    BadSignature,
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl From<TokenError> for ApiError {
    fn from(_: TokenError) -> Self {
        ApiError::InvalidToken
    }
}

pub struct TokenCodec {
    secret: Vec<u8>,
}

impl TokenCodec {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Mint a token whose subject is `username`.
    pub fn issue(&self, username: &str) -> String {
        let claims = TokenClaims {
            subject: username.to_string(),
        };
        // Serializing a struct with a single String field cannot fail.
        let payload = serde_json::to_vec(&claims).unwrap_or_default();
        let payload_b64 = B64URL.encode(payload);
        let tag = self.tag(&payload_b64);
        format!("{}{}{}", payload_b64, SEPARATOR, B64URL.encode(tag))
    }

    /// Recover the subject of a token, failing with
    /// [`ApiError::InvalidToken`] on any defect.
    pub fn decode(&self, token: &str) -> Result<String, ApiError> {
        self.verify(token)
            .map(|claims| claims.subject)
            .map_err(|e| {
                tracing::debug!("Rejected token: {}", e);
                ApiError::from(e)
            })
    }

    /// Verify the tag, then parse the payload. The payload bytes are never
    /// interpreted before the tag has been checked.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (payload_b64, tag_b64) = token
            .split_once(SEPARATOR)
            .ok_or(TokenError::Malformed)?;
        if payload_b64.is_empty() || tag_b64.contains(SEPARATOR) {
            return Err(TokenError::Malformed);
        }

        let tag = B64URL.decode(tag_b64)?;
        if !hmac_verify(&self.secret, &tag_input(payload_b64), &tag) {
            return Err(TokenError::BadSignature);
        }

        let payload = B64URL.decode(payload_b64)?;
        Ok(serde_json::from_slice(&payload)?)
    }

    fn tag(&self, payload_b64: &str) -> Vec<u8> {
        hmac_tag(&self.secret, &tag_input(payload_b64))
    }
}

fn tag_input(payload_b64: &str) -> [&[u8]; 3] {
    [TOKEN_CONTEXT, b".", payload_b64.as_bytes()]
}
