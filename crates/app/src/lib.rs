//! Marketplace application composition root
//!
//! Composes the page routes behind the session gate with the accounts API.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use marketplace_accounts::{AccountStore, AccountsState};
use marketplace_auth::{
    session_gate, AccessPolicy, AuthConfig, RequestGate, SessionVerifier, TokenCodec,
};

/// Create the main application router with all routes and middleware
pub fn create_app(auth_config: &AuthConfig, store: Arc<dyn AccountStore>) -> Router {
    if !auth_config.has_secret() {
        tracing::error!(
            "JWT_SECRET is not set; sessions cannot be issued and every session check fails"
        );
    }

    let verifier = SessionVerifier::new(TokenCodec::new(auth_config));
    let gate = RequestGate::new(verifier.clone(), AccessPolicy::default());
    let accounts_state = AccountsState::new(store, verifier);

    Router::new()
        .route("/health", get(health_check))
        .merge(page_routes())
        .merge(marketplace_accounts::routes().with_state(accounts_state))
        .fallback(not_found)
        .layer(from_fn_with_state(gate, session_gate))
}

/// Server-rendered pages; access is decided by the session gate
fn page_routes() -> Router {
    Router::new()
        .route("/", get(|| async { page("Marketplace") }))
        .route("/about", get(|| async { page("About") }))
        .route("/login", get(|| async { page("Log in") }))
        .route("/signup", get(|| async { page("Sign up") }))
        .route("/user/signup", get(|| async { page("Create an account") }))
        .route("/profile", get(|| async { page("Profile") }))
        .route("/dashboard", get(|| async { page("Dashboard") }))
        .route("/worker", get(|| async { page("Worker") }))
        .route("/admin", get(|| async { page("Admin") }))
        .route("/admin/worker", get(|| async { page("Admin: workers") }))
        .route("/admin/profile", get(|| async { page("Admin: profile") }))
        .route("/shop-admin", get(|| async { page("Shop admin") }))
}

fn page(title: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html><head><title>{title}</title></head><body><h1>{title}</h1></body></html>"
    ))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, page("Not found"))
}
