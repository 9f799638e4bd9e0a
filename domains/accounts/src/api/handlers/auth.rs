//! Signup and login API handlers
//!
//! - POST /api/user/signup - Create a consumer account
//! - POST /api/partner/signup - Create a worker account with its profile
//! - POST /api/shopAdmin/signup - Create a shop admin account with its shop
//! - POST /api/login - Exchange phone number and password for a session

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use marketplace_auth::TokenError;
use marketplace_common::{
    hash_password, verify_password, Error, RepositoryError, Result, ValidatedJson,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::session::{issue_session, TokenResponse};
use crate::api::state::AccountsState;
use crate::domain::entities::{AccountDetails, NewAccount, NewShop, ShopType, WorkerProfile};

const PHONE_TAKEN: &str = "Phone number already in use";

type SessionResponse = (StatusCode, CookieJar, Json<TokenResponse>);

/// Fields every signup carries
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 32, message = "Phone number is required"))]
    pub phone_number: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PartnerSignupRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub account: SignupRequest,

    #[validate(length(min = 1, message = "Driving license is required"))]
    pub driving_license: String,

    #[validate(length(min = 1, message = "Vehicle number is required"))]
    pub vehicle_number: String,

    #[validate(length(min = 1, message = "Vehicle RC is required"))]
    pub vehicle_rc: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ShopAdminSignupRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub account: SignupRequest,

    #[validate(length(min = 1, max = 255, message = "Shop name is required"))]
    pub shop_name: String,

    pub shop_address: Option<String>,

    #[validate(length(min = 1, message = "Shop type is required"))]
    pub shop_type: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Shared signup flow: uniqueness check, hashing, atomic create, session issuance
async fn register(
    state: &AccountsState,
    jar: CookieJar,
    request: SignupRequest,
    details: AccountDetails,
) -> Result<SessionResponse> {
    // Refuse before creating an account nobody could sign in to
    if !state.codec().is_configured() {
        return Err(TokenError::MissingSecret.into());
    }

    if state.store.find_by_phone(&request.phone_number).await?.is_some() {
        return Err(Error::Conflict(PHONE_TAKEN.to_string()));
    }

    let new_account = NewAccount {
        hashed_password: hash_password(&request.password)?,
        phone_number: request.phone_number,
        name: request.name,
        details,
    };

    // The pre-check can race with a concurrent signup; the store has the final say
    let account = state
        .store
        .create_account(new_account)
        .await
        .map_err(|e| match e {
            RepositoryError::AlreadyExists => Error::Conflict(PHONE_TAKEN.to_string()),
            other => Error::from(other),
        })?;

    tracing::info!(user_id = %account.id, role = %account.role, "Account created");

    issue_session(state.codec(), &account, jar, StatusCode::CREATED)
}

/// POST /api/user/signup - Create a consumer account
pub async fn signup_consumer(
    State(state): State<AccountsState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<SessionResponse> {
    register(&state, jar, request, AccountDetails::Consumer).await
}

/// POST /api/partner/signup - Create a worker account with its profile
pub async fn signup_partner(
    State(state): State<AccountsState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<PartnerSignupRequest>,
) -> Result<SessionResponse> {
    let details = AccountDetails::Worker(WorkerProfile {
        driving_license: request.driving_license,
        vehicle_number: request.vehicle_number,
        vehicle_rc: request.vehicle_rc,
    });

    register(&state, jar, request.account, details).await
}

/// POST /api/shopAdmin/signup - Create a shop admin account with its shop
pub async fn signup_shop_admin(
    State(state): State<AccountsState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<ShopAdminSignupRequest>,
) -> Result<SessionResponse> {
    let shop_type = request
        .shop_type
        .parse::<ShopType>()
        .map_err(|e| Error::Validation(e.to_string()))?;

    let details = AccountDetails::ShopAdmin(NewShop {
        name: request.shop_name,
        address: request.shop_address.filter(|a| !a.trim().is_empty()),
        shop_type,
    });

    register(&state, jar, request.account, details).await
}

/// POST /api/login - Exchange phone number and password for a session
pub async fn login(
    State(state): State<AccountsState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<SessionResponse> {
    let account = state.store.find_by_phone(&request.phone_number).await?;

    // Unknown phone and wrong password are indistinguishable to the caller
    let Some(account) = account else {
        tracing::debug!("Login attempt for unknown phone number");
        return Err(Error::InvalidCredentials);
    };

    if !verify_password(&request.password, &account.hashed_password)? {
        tracing::debug!(user_id = %account.id, "Login attempt with wrong password");
        return Err(Error::InvalidCredentials);
    }

    tracing::info!(user_id = %account.id, role = %account.role, "Login succeeded");

    issue_session(state.codec(), &account, jar, StatusCode::OK)
}
