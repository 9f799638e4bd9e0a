//! PostgreSQL credential store

use chrono::{DateTime, Utc};
use marketplace_auth::Role;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::{AccountStore, StoreResult};
use crate::domain::entities::{
    Account, AccountDetails, AccountSummary, NewAccount, NewShop, Shop, ShopAdminContact,
    ShopSummary, ShopType, WorkerProfile, WorkerSummary,
};

const ACCOUNT_COLUMNS: &str = "id, phone_number, name, hashed_password, role, created_at";

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WorkerRow {
    id: Uuid,
    name: String,
    phone_number: String,
    created_at: DateTime<Utc>,
    driving_license: Option<String>,
    vehicle_number: Option<String>,
    vehicle_rc: Option<String>,
}

impl From<WorkerRow> for WorkerSummary {
    fn from(row: WorkerRow) -> Self {
        let worker_profile = match (row.driving_license, row.vehicle_number, row.vehicle_rc) {
            (Some(driving_license), Some(vehicle_number), Some(vehicle_rc)) => {
                Some(WorkerProfile {
                    driving_license,
                    vehicle_number,
                    vehicle_rc,
                })
            }
            _ => None,
        };

        Self {
            account: AccountSummary {
                id: row.id,
                name: row.name,
                phone_number: row.phone_number,
                created_at: row.created_at,
            },
            worker_profile,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ShopRow {
    id: Uuid,
    admin_id: Uuid,
    name: String,
    address: Option<String>,
    #[sqlx(rename = "type")]
    shop_type: ShopType,
    created_at: DateTime<Utc>,
    admin_name: String,
    admin_phone_number: String,
}

impl From<ShopRow> for ShopSummary {
    fn from(row: ShopRow) -> Self {
        Self {
            admin: ShopAdminContact {
                id: row.admin_id,
                name: row.admin_name,
                phone_number: row.admin_phone_number,
            },
            shop: Shop {
                id: row.id,
                admin_id: row.admin_id,
                name: row.name,
                address: row.address,
                shop_type: row.shop_type,
                created_at: row.created_at,
            },
        }
    }
}

/// Insert a worker profile within an existing transaction.
async fn create_worker_profile_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    profile: &WorkerProfile,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO worker_profiles (user_id, driving_license, vehicle_number, vehicle_rc)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user_id)
    .bind(&profile.driving_license)
    .bind(&profile.vehicle_number)
    .bind(&profile.vehicle_rc)
    .execute(&mut **transaction)
    .await?;
    Ok(())
}

/// Insert a shop within an existing transaction.
async fn create_shop_tx(
    transaction: &mut Transaction<'_, Postgres>,
    admin_id: Uuid,
    shop: &NewShop,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO shops (id, admin_id, name, address, type)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(admin_id)
    .bind(&shop.name)
    .bind(&shop.address)
    .bind(shop.shop_type)
    .execute(&mut **transaction)
    .await?;
    Ok(())
}

#[async_trait::async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_phone(&self, phone_number: &str) -> StoreResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {} FROM users WHERE phone_number = $1",
            ACCOUNT_COLUMNS
        ))
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            ACCOUNT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn create_account(&self, new_account: NewAccount) -> StoreResult<Account> {
        let mut transaction = self.pool.begin().await?;

        let account = sqlx::query_as::<_, Account>(&format!(
            r#"
            INSERT INTO users (id, phone_number, name, hashed_password, role, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING {}
            "#,
            ACCOUNT_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&new_account.phone_number)
        .bind(&new_account.name)
        .bind(&new_account.hashed_password)
        .bind(new_account.role())
        .fetch_one(&mut *transaction)
        .await?;

        match &new_account.details {
            AccountDetails::Consumer => {}
            AccountDetails::Worker(profile) => {
                create_worker_profile_tx(&mut transaction, account.id, profile).await?
            }
            AccountDetails::ShopAdmin(shop) => {
                create_shop_tx(&mut transaction, account.id, shop).await?
            }
        }

        transaction.commit().await?;
        Ok(account)
    }

    async fn list_accounts(
        &self,
        role: Role,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<AccountSummary>> {
        let accounts = sqlx::query_as::<_, AccountSummary>(
            r#"
            SELECT id, name, phone_number, created_at
            FROM users
            WHERE role = $1
            ORDER BY created_at DESC, id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(role)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn count_accounts(&self, role: Role) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list_workers(&self, offset: i64, limit: i64) -> StoreResult<Vec<WorkerSummary>> {
        let rows = sqlx::query_as::<_, WorkerRow>(
            r#"
            SELECT u.id, u.name, u.phone_number, u.created_at,
                   w.driving_license, w.vehicle_number, w.vehicle_rc
            FROM users u
            LEFT JOIN worker_profiles w ON w.user_id = u.id
            WHERE u.role = $1
            ORDER BY u.created_at DESC, u.id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(Role::Worker)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WorkerSummary::from).collect())
    }

    async fn list_shops(&self, offset: i64, limit: i64) -> StoreResult<Vec<ShopSummary>> {
        let rows = sqlx::query_as::<_, ShopRow>(
            r#"
            SELECT s.id, s.admin_id, s.name, s.address, s.type, s.created_at,
                   u.name AS admin_name, u.phone_number AS admin_phone_number
            FROM shops s
            JOIN users u ON u.id = s.admin_id
            ORDER BY s.created_at DESC, s.id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ShopSummary::from).collect())
    }

    async fn count_shops(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shops")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn shops_managed_by(&self, admin_id: Uuid) -> StoreResult<Vec<Shop>> {
        let shops = sqlx::query_as::<_, Shop>(
            r#"
            SELECT id, admin_id, name, address, type, created_at
            FROM shops
            WHERE admin_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(shops)
    }
}
