//! Session resolution for bearer-authenticated requests
//!
//! A request is authenticated by an `Authorization: Bearer <token>` header.
//! The token names a username; the username must still be registered.

use crate::error::{ApiError, ApiResult};
use crate::store::IdentityStore;
use crate::token::TokenCodec;
use crate::types::IdentityRecord;

const BEARER_PREFIX: &str = "bearer ";

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively and must be followed by a
/// space. Surrounding whitespace on the token is ignored.
pub fn extract_bearer(header: Option<&str>) -> ApiResult<&str> {
    let value = header.ok_or(ApiError::MissingToken)?;
    match (value.get(..BEARER_PREFIX.len()), value.get(BEARER_PREFIX.len()..)) {
        (Some(prefix), Some(rest)) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            Ok(rest.trim())
        }
        _ => Err(ApiError::MissingToken),
    }
}

/// Resolves `Authorization` header values to registered identities
pub struct SessionResolver<'a> {
    store: &'a IdentityStore,
    tokens: &'a TokenCodec,
}

impl<'a> SessionResolver<'a> {
    pub fn new(store: &'a IdentityStore, tokens: &'a TokenCodec) -> Self {
        Self { store, tokens }
    }

    /// A corrupt token and a token for an unknown user both yield
    /// [`ApiError::InvalidToken`].
    pub fn resolve(&self, authorization: Option<&str>) -> ApiResult<IdentityRecord> {
        let token = extract_bearer(authorization)?;
        let username = self.tokens.decode(token)?;
        self.store.get(&username).map_err(|_| {
            tracing::debug!("Token subject is not a registered identity");
            ApiError::InvalidToken
        })
    }
}
