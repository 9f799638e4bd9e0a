//! API-facing authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::claims::Role;
use crate::policy::Access;

/// Rejection returned by the session extractors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No valid session
    Unauthorized,
    /// Valid session, wrong role
    Forbidden { required: Role },
}

impl AuthError {
    /// Map a denial from the shared classification; `None` means the request may proceed
    pub fn from_access(access: Access) -> Option<Self> {
        match access {
            Access::Granted | Access::AlreadySignedIn => None,
            Access::LoginRequired => Some(AuthError::Unauthorized),
            Access::RoleMismatch { required } => Some(AuthError::Forbidden { required }),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden { .. } => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AuthError::Unauthorized => ("UNAUTHORIZED", "Authentication required".to_string()),
            AuthError::Forbidden { required } => (
                "FORBIDDEN",
                format!("This resource requires the {} role", required),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (self.status_code(), body).into_response()
    }
}
