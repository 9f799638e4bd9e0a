//! Request gate: per-request page access decision and its axum middleware

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};

use crate::config::SESSION_COOKIE;
use crate::policy::{check, Access, AccessPolicy, HOME_PATH, LOGIN_PATH};
use crate::verifier::SessionVerifier;

/// Page-route outcome of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    RedirectLogin,
    RedirectHome,
}

impl From<Access> for Decision {
    fn from(access: Access) -> Self {
        match access {
            Access::Granted => Decision::Continue,
            Access::LoginRequired => Decision::RedirectLogin,
            // Page routes soft-deny a wrong role by sending the principal home
            Access::AlreadySignedIn | Access::RoleMismatch { .. } => Decision::RedirectHome,
        }
    }
}

impl Decision {
    /// Redirect target, or `None` to pass the request through
    pub fn location(&self) -> Option<&'static str> {
        match self {
            Decision::Continue => None,
            Decision::RedirectLogin => Some(LOGIN_PATH),
            Decision::RedirectHome => Some(HOME_PATH),
        }
    }
}

/// Stateless gate over a verifier and an access policy
#[derive(Clone)]
pub struct RequestGate {
    verifier: SessionVerifier,
    policy: Arc<AccessPolicy>,
}

impl RequestGate {
    pub fn new(verifier: SessionVerifier, policy: AccessPolicy) -> Self {
        Self {
            verifier,
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Decide a page request. Pure in (path, token, now, configured secret).
    pub fn evaluate(&self, path: &str, token: Option<&str>, now: DateTime<Utc>) -> Decision {
        let auth = self.verifier.verify_at(token, now);
        let class = self.policy.classify(path);
        Decision::from(check(class, &auth))
    }
}

/// Axum middleware applying the gate to every non-excluded path.
///
/// Install with `axum::middleware::from_fn_with_state(gate, session_gate)`.
pub async fn session_gate(
    State(gate): State<RequestGate>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    if gate.policy().is_excluded(&path) {
        return next.run(request).await;
    }

    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value());
    let decision = gate.evaluate(&path, token, Utc::now());
    tracing::debug!(path = %path, decision = ?decision, "Session gate decision");

    match decision.location() {
        Some(location) => Redirect::temporary(location).into_response(),
        None => next.run(request).await,
    }
}
