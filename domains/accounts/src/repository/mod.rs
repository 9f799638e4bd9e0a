//! Credential store for the accounts domain
//!
//! `AccountStore` is the seam between handlers and persistence:
//! `PgAccountStore` backs production, `MemoryAccountStore` backs local
//! runs without a database and the router tests.

pub mod memory;
pub mod postgres;

use marketplace_auth::Role;
use marketplace_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::{
    Account, AccountSummary, NewAccount, Shop, ShopSummary, WorkerSummary,
};

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

type StoreResult<T> = std::result::Result<T, RepositoryError>;

/// Account persistence operations
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_phone(&self, phone_number: &str) -> StoreResult<Option<Account>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Account>>;

    /// Create the account and its role-specific records atomically.
    ///
    /// A taken phone number is `RepositoryError::AlreadyExists`.
    async fn create_account(&self, new_account: NewAccount) -> StoreResult<Account>;

    /// Accounts holding `role`, newest first
    async fn list_accounts(
        &self,
        role: Role,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<AccountSummary>>;

    async fn count_accounts(&self, role: Role) -> StoreResult<i64>;

    /// Worker accounts with their profiles, newest first
    async fn list_workers(&self, offset: i64, limit: i64) -> StoreResult<Vec<WorkerSummary>>;

    /// Shops with their managing account, newest first
    async fn list_shops(&self, offset: i64, limit: i64) -> StoreResult<Vec<ShopSummary>>;

    async fn count_shops(&self) -> StoreResult<i64>;

    async fn shops_managed_by(&self, admin_id: Uuid) -> StoreResult<Vec<Shop>>;
}
