//! Session token codec: HS256 JWT signing and verification

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::{SessionClaims, SessionIdentity};
use crate::config::AuthConfig;

/// Token encode/decode failures
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("session signing secret is not configured")]
    MissingSecret,

    #[error("token is malformed or its signature does not verify: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("token expired at {exp}")]
    Expired { exp: i64 },

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl From<TokenError> for marketplace_common::Error {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingSecret => {
                marketplace_common::Error::Configuration("JWT secret is not configured".to_string())
            }
            TokenError::Signing(e) => {
                marketplace_common::Error::Internal(format!("Failed to sign token: {}", e))
            }
            TokenError::Invalid(_) | TokenError::Expired { .. } => {
                marketplace_common::Error::Authentication("Invalid or expired token".to_string())
            }
        }
    }
}

#[derive(Clone)]
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Encodes and decodes signed session tokens.
///
/// Holds no keys when the configuration has no secret; every operation then
/// fails with [`TokenError::MissingSecret`].
#[derive(Clone)]
pub struct TokenCodec {
    keys: Option<SigningKeys>,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let keys = config.jwt_secret.as_deref().map(|secret| SigningKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        });

        Self {
            keys,
            ttl: config.token_ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether a signing secret is available
    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    /// Issue a token for `identity`, valid from now for the configured ttl
    pub fn encode(&self, identity: &SessionIdentity) -> Result<String, TokenError> {
        self.encode_at(identity, Utc::now())
    }

    pub fn encode_at(
        &self,
        identity: &SessionIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::MissingSecret)?;

        let claims = SessionClaims {
            user_id: identity.user_id,
            role: identity.role,
            phone: identity.phone.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).map_err(TokenError::Signing)
    }

    /// Decode and verify a token against the current time
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode and verify a token as of `now`.
    ///
    /// The token is valid while `now <= exp`; there is no leeway.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::MissingSecret)?;

        // Expiry is checked below against the supplied clock, not the system one
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        let claims = decode::<SessionClaims>(token, &keys.decoding, &validation)
            .map_err(TokenError::Invalid)?
            .claims;

        if now.timestamp() > claims.exp {
            return Err(TokenError::Expired { exp: claims.exp });
        }

        Ok(claims)
    }
}
