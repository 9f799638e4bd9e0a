//! In-memory credential store for local runs and tests

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use marketplace_auth::Role;
use marketplace_common::RepositoryError;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AccountStore, StoreResult};
use crate::domain::entities::{
    Account, AccountDetails, AccountSummary, NewAccount, Shop, ShopAdminContact, ShopSummary,
    WorkerProfile, WorkerSummary,
};

#[derive(Default)]
struct Tables {
    /// Insertion order; newest last
    accounts: Vec<Account>,
    worker_profiles: HashMap<Uuid, WorkerProfile>,
    shops: Vec<Shop>,
}

/// Credential store held entirely in process memory.
///
/// Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct MemoryAccountStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed account, bypassing signup.
    ///
    /// Admin accounts have no signup route; this seeds them.
    pub async fn insert_account(&self, account: Account) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if tables
            .accounts
            .iter()
            .any(|a| a.phone_number == account.phone_number)
        {
            return Err(RepositoryError::AlreadyExists);
        }
        tables.accounts.push(account);
        Ok(())
    }
}

fn page<T>(items: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
    items
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

#[async_trait::async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_phone(&self, phone_number: &str) -> StoreResult<Option<Account>> {
        let tables = self.tables.read().await;
        Ok(tables
            .accounts
            .iter()
            .find(|a| a.phone_number == phone_number)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Account>> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn create_account(&self, new_account: NewAccount) -> StoreResult<Account> {
        // A single write guard makes the check-and-insert atomic
        let mut tables = self.tables.write().await;

        if tables
            .accounts
            .iter()
            .any(|a| a.phone_number == new_account.phone_number)
        {
            return Err(RepositoryError::AlreadyExists);
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            role: new_account.role(),
            phone_number: new_account.phone_number,
            name: new_account.name,
            hashed_password: new_account.hashed_password,
            created_at: now,
        };

        match new_account.details {
            AccountDetails::Consumer => {}
            AccountDetails::Worker(profile) => {
                tables.worker_profiles.insert(account.id, profile);
            }
            AccountDetails::ShopAdmin(shop) => tables.shops.push(Shop {
                id: Uuid::new_v4(),
                admin_id: account.id,
                name: shop.name,
                address: shop.address,
                shop_type: shop.shop_type,
                created_at: now,
            }),
        }

        tables.accounts.push(account.clone());
        Ok(account)
    }

    async fn list_accounts(
        &self,
        role: Role,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<AccountSummary>> {
        let tables = self.tables.read().await;
        let matching = tables
            .accounts
            .iter()
            .rev()
            .filter(|a| a.role == role)
            .map(AccountSummary::from);
        Ok(page(matching, offset, limit))
    }

    async fn count_accounts(&self, role: Role) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.iter().filter(|a| a.role == role).count() as i64)
    }

    async fn list_workers(&self, offset: i64, limit: i64) -> StoreResult<Vec<WorkerSummary>> {
        let tables = self.tables.read().await;
        let workers = tables
            .accounts
            .iter()
            .rev()
            .filter(|a| a.role == Role::Worker)
            .map(|a| WorkerSummary {
                account: AccountSummary::from(a),
                worker_profile: tables.worker_profiles.get(&a.id).cloned(),
            });
        Ok(page(workers, offset, limit))
    }

    async fn list_shops(&self, offset: i64, limit: i64) -> StoreResult<Vec<ShopSummary>> {
        let tables = self.tables.read().await;
        let shops = tables.shops.iter().rev().filter_map(|shop| {
            let admin = tables.accounts.iter().find(|a| a.id == shop.admin_id)?;
            Some(ShopSummary {
                shop: shop.clone(),
                admin: ShopAdminContact {
                    id: admin.id,
                    name: admin.name.clone(),
                    phone_number: admin.phone_number.clone(),
                },
            })
        });
        Ok(page(shops, offset, limit))
    }

    async fn count_shops(&self) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.shops.len() as i64)
    }

    async fn shops_managed_by(&self, admin_id: Uuid) -> StoreResult<Vec<Shop>> {
        let tables = self.tables.read().await;
        Ok(tables
            .shops
            .iter()
            .filter(|s| s.admin_id == admin_id)
            .cloned()
            .collect())
    }
}
