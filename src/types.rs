//! Core types for the user service
//!
//! The stored record carries the credential digest; everything that leaves
//! the process goes through [`IdentityPublic`] instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequential identity identifier, rendered as a decimal string ("1", "2", ...)
pub type IdentityId = String;

// ============ Identity Types ============

/// Stored identity record
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    /// Assigned once at creation, never reused
    pub id: IdentityId,
    /// Unique, case-sensitive, immutable
    pub username: String,
    /// Display name
    pub name: String,
    pub email: String,
    /// Output of the credential hasher; never serialized
    pub(crate) password_hash: String,
}

impl fmt::Debug for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Public view of an identity (no credential digest)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityPublic {
    pub id: IdentityId,
    pub username: String,
    pub name: String,
    pub email: String,
}

impl From<&IdentityRecord> for IdentityPublic {
    fn from(r: &IdentityRecord) -> Self {
        Self {
            id: r.id.clone(),
            username: r.username.clone(),
            name: r.name.clone(),
            email: r.email.clone(),
        }
    }
}

impl From<IdentityRecord> for IdentityPublic {
    fn from(r: IdentityRecord) -> Self {
        Self {
            id: r.id,
            username: r.username,
            name: r.name,
            email: r.email,
        }
    }
}

// ============ Token Types ============

/// Signed token payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject username
    #[serde(rename = "u")]
    pub subject: String,
}

// ============ API Request/Response Types ============

/// Registration request. Missing fields default to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
}

// ============ Response Types ============

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            hint: Some(hint.into()),
            ..Self::new(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_view_has_no_digest() {
        let record = IdentityRecord {
            id: "1".into(),
            username: "alice".into(),
            name: "Alice".into(),
            email: "a@x.com".into(),
            password_hash: "deadbeef".into(),
        };
        let json = serde_json::to_value(IdentityPublic::from(&record)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(json["id"], "1");
        assert_eq!(json["username"], "alice");
        assert!(!json.to_string().contains("deadbeef"));
    }

    #[test]
    fn test_debug_redacts_digest() {
        let record = IdentityRecord {
            id: "1".into(),
            username: "alice".into(),
            name: "Alice".into(),
            email: "a@x.com".into(),
            password_hash: crate::crypto::hash_password("pw1"),
        };
        let dbg = format!("{:?}", record);
        assert!(dbg.contains("alice"));
        assert!(dbg.contains("<redacted>"));
        assert!(!dbg.contains(&record.password_hash));
    }

    #[test]
    fn test_register_request_defaults() {
        let req: RegisterRequest = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(req.username, "bob");
        assert!(req.password.is_empty());
        assert!(req.email.is_empty());
    }

    #[test]
    fn test_claims_wire_name() {
        let claims = TokenClaims {
            subject: "alice".into(),
        };
        assert_eq!(serde_json::to_string(&claims).unwrap(), r#"{"u":"alice"}"#);
    }

    #[test]
    fn test_error_envelope() {
        let body = serde_json::to_value(ErrorResponse::new("invalid token")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "invalid token");
        assert!(body.get("hint").is_none());

        let body = serde_json::to_value(ErrorResponse::with_hint("x", "y")).unwrap();
        assert_eq!(body["hint"], "y");
    }
}
