//! Session authentication and authorization for the marketplace
//!
//! Provides the HS256 session token codec, cookie verification, the
//! prefix-based access policy, the page-route gate middleware, and axum
//! extractors for API routes that work with any state implementing
//! `FromRef<S>` for `SessionVerifier`.

mod claims;
mod config;
mod error;
mod extractors;
mod gate;
mod jwt;
mod policy;
mod verifier;

pub use claims::{Role, SessionClaims, SessionIdentity};
pub use config::{AuthConfig, SESSION_COOKIE};
pub use error::AuthError;
pub use extractors::{AdminUser, SessionUser};
pub use gate::{session_gate, Decision, RequestGate};
pub use jwt::{TokenCodec, TokenError};
pub use policy::{check, Access, AccessPolicy, PathClass, HOME_PATH, LOGIN_PATH};
pub use verifier::{AuthResult, SessionVerifier};
