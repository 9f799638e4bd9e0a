//! Session issuance: token plus `authToken` cookie

use axum::{http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use marketplace_auth::{TokenCodec, SESSION_COOKIE};
use marketplace_common::Result;
use serde::Serialize;

use crate::domain::entities::Account;

/// Body of a successful signup or login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Session cookie scoped to the whole site, lifetime matching the token
pub fn session_cookie(token: String, ttl: chrono::Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build()
}

/// Issue a session for `account`, returning it in the body and as a cookie
pub fn issue_session(
    codec: &TokenCodec,
    account: &Account,
    jar: CookieJar,
    status: StatusCode,
) -> Result<(StatusCode, CookieJar, Json<TokenResponse>)> {
    let token = codec.encode(&account.identity())?;
    let jar = jar.add(session_cookie(token.clone(), codec.ttl()));

    Ok((status, jar, Json(TokenResponse { token })))
}
