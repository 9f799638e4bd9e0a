//! Route definitions for the accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{admin, auth, profile};
use super::state::AccountsState;

/// Signup and login routes; no session required
fn auth_routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/user/signup", post(auth::signup_consumer))
        .route("/api/partner/signup", post(auth::signup_partner))
        .route("/api/shopAdmin/signup", post(auth::signup_shop_admin))
        .route("/api/login", post(auth::login))
}

/// Profile routes; any authenticated principal
fn profile_routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/profile/me", get(profile::get_me))
        .route("/api/shopAdmin/profile", get(profile::get_shop_admin_profile))
}

/// Admin listing routes; admin role only
fn admin_routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/admin/consumer", get(admin::list_consumers))
        .route("/api/admin/worker", get(admin::list_workers))
        .route("/api/admin/shop", get(admin::list_shops))
}

/// Create all accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(admin_routes())
}
