//! Admin listing API handlers
//!
//! All routes require the admin role; other roles get 403.
//! - GET /api/admin/consumer - Paginated consumer accounts
//! - GET /api/admin/worker - Paginated worker accounts with profiles
//! - GET /api/admin/shop - Paginated shops with their admin

use axum::{
    extract::{Query, State},
    Json,
};
use marketplace_auth::{AdminUser, Role};
use marketplace_common::{PageMeta, Pagination, Result};
use serde::Serialize;

use crate::api::state::AccountsState;
use crate::domain::entities::{AccountSummary, ShopSummary, WorkerSummary};

/// Paginated list envelope: `{data, meta}`
#[derive(Debug, Serialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// GET /api/admin/consumer - Paginated consumer accounts
pub async fn list_consumers(
    AdminUser(_admin): AdminUser,
    State(state): State<AccountsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Paged<AccountSummary>>> {
    let data = state
        .store
        .list_accounts(Role::Consumer, pagination.offset(), pagination.limit())
        .await?;
    let total = state.store.count_accounts(Role::Consumer).await?;

    Ok(Json(Paged {
        data,
        meta: PageMeta::new(total, &pagination),
    }))
}

/// GET /api/admin/worker - Paginated worker accounts with profiles
pub async fn list_workers(
    AdminUser(_admin): AdminUser,
    State(state): State<AccountsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Paged<WorkerSummary>>> {
    let data = state
        .store
        .list_workers(pagination.offset(), pagination.limit())
        .await?;
    let total = state.store.count_accounts(Role::Worker).await?;

    Ok(Json(Paged {
        data,
        meta: PageMeta::new(total, &pagination),
    }))
}

/// GET /api/admin/shop - Paginated shops with their admin
pub async fn list_shops(
    AdminUser(_admin): AdminUser,
    State(state): State<AccountsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Paged<ShopSummary>>> {
    let data = state
        .store
        .list_shops(pagination.offset(), pagination.limit())
        .await?;
    let total = state.store.count_shops().await?;

    Ok(Json(Paged {
        data,
        meta: PageMeta::new(total, &pagination),
    }))
}
