//! Authentication configuration

use chrono::Duration;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "authToken";

/// Authentication configuration.
///
/// Built once at process start and passed into the codec; never read from
/// the environment inside the request path.
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret. `None` disables issuance and fails every verification.
    pub jwt_secret: Option<String>,
    /// Session lifetime
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: Option<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.filter(|s| !s.is_empty()),
            token_ttl: Duration::days(1),
        }
    }

    pub fn with_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn has_secret(&self) -> bool {
        self.jwt_secret.is_some()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
