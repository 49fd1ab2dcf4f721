//! User Service
//!
//! Minimal identity service for username/password accounts.
//!
//! ## Architecture
//!
//! - **Store**: In-memory, append-only map of usernames to identity records
//! - **Credentials**: Passwords are kept only as SHA-256 digests
//! - **Tokens**: Login returns an HMAC-signed (not encrypted) bearer token
//! - **Sessions**: Stateless; a token stays valid while its user exists
//! - **No persistence**: Restarting the process discards every identity

pub mod api;
pub mod auth;
pub mod config;
pub mod crypto;
pub mod error;
pub mod state;
pub mod store;
pub mod token;
pub mod types;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
