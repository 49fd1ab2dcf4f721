use std::env;
use std::fmt;

/// Fallback signing secret for local development. Anyone reading this source
/// can forge tokens signed with it, so never run a public instance without
/// setting `SECRET_KEY`.
pub const DEFAULT_SECRET: &str = "dev-secret";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub signing_secret: String,
    pub version: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            signing_secret: env::var("SECRET_KEY")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SECRET.into()),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }

    /// True when no `SECRET_KEY` was supplied and the development fallback is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.signing_secret == DEFAULT_SECRET
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("signing_secret", &"<redacted>")
            .field("version", &self.version)
            .finish()
    }
}
