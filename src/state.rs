//! Application state for the user service

use std::sync::Arc;
use std::time::Instant;

use crate::auth::SessionResolver;
use crate::config::Config;
use crate::error::ApiResult;
use crate::store::{IdentityStore, NewIdentity};
use crate::token::TokenCodec;
use crate::types::*;

pub const SERVICE_NAME: &str = "user-service";

/// Global application state
pub struct AppState {
    /// Registered identities
    pub store: IdentityStore,
    /// Token signer, keyed with the configured secret
    pub tokens: TokenCodec,
    /// Configuration
    pub config: Config,
    /// Start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            store: IdentityStore::new(),
            tokens: TokenCodec::new(config.signing_secret.as_bytes()),
            config,
            start_time: Instant::now(),
        })
    }

    // ============ Identity Operations ============

    /// Register new identity
    pub fn register(&self, req: &RegisterRequest) -> ApiResult<IdentityPublic> {
        let record = self.store.create(NewIdentity {
            username: &req.username,
            password: &req.password,
            name: &req.name,
            email: &req.email,
        })?;

        tracing::info!("Registered identity: {} ({})", record.username, record.id);
        Ok(IdentityPublic::from(record))
    }

    /// Check credentials and mint a token for the identity
    pub fn login(&self, req: &LoginRequest) -> ApiResult<LoginResponse> {
        let record = self
            .store
            .authenticate(&req.username, &req.password)
            .inspect_err(|_| tracing::debug!("Login rejected"))?;

        tracing::debug!("Issued token for identity {}", record.id);
        Ok(LoginResponse {
            token: self.tokens.issue(&record.username),
        })
    }

    /// Resolve the identity behind an `Authorization` header value
    pub fn profile(&self, authorization: Option<&str>) -> ApiResult<IdentityPublic> {
        self.resolver()
            .resolve(authorization)
            .map(IdentityPublic::from)
    }

    pub fn resolver(&self) -> SessionResolver<'_> {
        SessionResolver::new(&self.store, &self.tokens)
    }

    /// Get health info
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".into(),
            service: SERVICE_NAME.into(),
            version: self.config.version.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}
