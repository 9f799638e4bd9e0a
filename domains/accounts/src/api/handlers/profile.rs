//! Profile API handlers
//!
//! - GET /api/profile/me - Current account summary
//! - GET /api/shopAdmin/profile - Current account with the shops it manages

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use marketplace_auth::{Role, SessionUser};
use marketplace_common::{Error, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::api::state::AccountsState;
use crate::domain::entities::{Account, Shop};

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: MeUser,
}

#[derive(Debug, Serialize)]
pub struct MeUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct ShopAdminProfileResponse {
    pub user: ShopAdminProfile,
}

#[derive(Debug, Serialize)]
pub struct ShopAdminProfile {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub shops_managed: Vec<Shop>,
}

async fn current_account(state: &AccountsState, user_id: Uuid) -> Result<Account> {
    state
        .store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User profile not found".to_string()))
}

/// GET /api/profile/me - Current account summary
pub async fn get_me(
    SessionUser(claims): SessionUser,
    State(state): State<AccountsState>,
) -> Result<Json<MeResponse>> {
    let account = current_account(&state, claims.user_id).await?;

    Ok(Json(MeResponse {
        user: MeUser {
            id: account.id,
            name: account.name,
            role: account.role,
        },
    }))
}

/// GET /api/shopAdmin/profile - Current account with the shops it manages
pub async fn get_shop_admin_profile(
    SessionUser(claims): SessionUser,
    State(state): State<AccountsState>,
) -> Result<Json<ShopAdminProfileResponse>> {
    let account = current_account(&state, claims.user_id).await?;
    let shops_managed = state.store.shops_managed_by(account.id).await?;

    Ok(Json(ShopAdminProfileResponse {
        user: ShopAdminProfile {
            id: account.id,
            name: account.name,
            phone_number: account.phone_number,
            role: account.role,
            created_at: account.created_at,
            shops_managed,
        },
    }))
}
