//! Session verification: raw cookie value to authentication state

use chrono::{DateTime, Utc};

use crate::claims::{Role, SessionClaims};
use crate::jwt::TokenCodec;

/// Outcome of verifying a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Unauthenticated,
    Authenticated(SessionClaims),
}

impl AuthResult {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authenticated(_))
    }

    pub fn role(&self) -> Option<Role> {
        self.claims().map(|c| c.role)
    }

    pub fn claims(&self) -> Option<&SessionClaims> {
        match self {
            AuthResult::Authenticated(claims) => Some(claims),
            AuthResult::Unauthenticated => None,
        }
    }

    pub fn into_claims(self) -> Option<SessionClaims> {
        match self {
            AuthResult::Authenticated(claims) => Some(claims),
            AuthResult::Unauthenticated => None,
        }
    }
}

/// Verifies session tokens. Every failure degrades to `Unauthenticated`.
#[derive(Clone)]
pub struct SessionVerifier {
    codec: TokenCodec,
}

impl SessionVerifier {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn verify(&self, token: Option<&str>) -> AuthResult {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: Option<&str>, now: DateTime<Utc>) -> AuthResult {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return AuthResult::Unauthenticated;
        };

        match self.codec.decode_at(token, now) {
            Ok(claims) => AuthResult::Authenticated(claims),
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                AuthResult::Unauthenticated
            }
        }
    }
}
