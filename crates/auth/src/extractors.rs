//! Axum extractors for API routes
//!
//! Generic over any state `S` where `SessionVerifier: FromRef<S>`.
//! They share `check` with the page gate but report denials as JSON
//! (401/403) instead of redirecting.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use crate::claims::{Role, SessionClaims};
use crate::config::SESSION_COOKIE;
use crate::error::AuthError;
use crate::policy::{check, PathClass};
use crate::verifier::SessionVerifier;

fn authorize<S>(parts: &Parts, state: &S, class: PathClass) -> Result<SessionClaims, AuthError>
where
    SessionVerifier: FromRef<S>,
{
    let verifier = SessionVerifier::from_ref(state);
    let jar = CookieJar::from_headers(&parts.headers);
    let auth = verifier.verify(jar.get(SESSION_COOKIE).map(|cookie| cookie.value()));

    if let Some(rejection) = AuthError::from_access(check(class, &auth)) {
        tracing::debug!(path = %parts.uri.path(), rejection = ?rejection, "API request denied");
        return Err(rejection);
    }

    // A protected class never grants an unauthenticated request
    auth.into_claims().ok_or(AuthError::Unauthorized)
}

/// Any authenticated principal
#[derive(Debug)]
pub struct SessionUser(pub SessionClaims);

impl<S> FromRequestParts<S> for SessionUser
where
    SessionVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        authorize(parts, state, PathClass::AUTHENTICATED).map(SessionUser)
    }
}

/// Authenticated principal holding the admin role.
///
/// Other roles are rejected with 403 FORBIDDEN.
#[derive(Debug)]
pub struct AdminUser(pub SessionClaims);

impl<S> FromRequestParts<S> for AdminUser
where
    SessionVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        authorize(parts, state, PathClass::role(Role::Admin)).map(AdminUser)
    }
}
