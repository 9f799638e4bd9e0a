//! Domain entities for the accounts domain
//!
//! An account's role is fixed at creation and derived from the details
//! supplied at signup, so a worker always has a worker profile and a shop
//! admin always manages at least the shop created alongside it.

use chrono::{DateTime, Utc};
use marketplace_auth::{Role, SessionIdentity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity (`users` table)
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub phone_number: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Identity snapshot bound into a session token
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            user_id: self.id,
            role: self.role,
            phone: self.phone_number.clone(),
        }
    }
}

/// Vehicle and licence details of a worker (delivery partner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkerProfile {
    pub driving_license: String,
    pub vehicle_number: String,
    pub vehicle_rc: String,
}

/// Shop categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "shop_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShopType {
    Restaurant,
    Stationary,
    Grocery,
}

impl ShopType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopType::Restaurant => "restaurant",
            ShopType::Stationary => "stationary",
            ShopType::Grocery => "grocery",
        }
    }
}

impl std::fmt::Display for ShopType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid shop type '{0}'. Must be 'restaurant', 'stationary', or 'grocery'")]
pub struct ParseShopTypeError(pub String);

impl std::str::FromStr for ShopType {
    type Err = ParseShopTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(ShopType::Restaurant),
            "stationary" => Ok(ShopType::Stationary),
            "grocery" => Ok(ShopType::Grocery),
            other => Err(ParseShopTypeError(other.to_string())),
        }
    }
}

/// Shop entity (`shops` table)
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Shop {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub admin_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub shop_type: ShopType,
    pub created_at: DateTime<Utc>,
}

/// Shop fields supplied at signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShop {
    pub name: String,
    pub address: Option<String>,
    pub shop_type: ShopType,
}

/// Role-specific data captured at signup; determines the account's role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountDetails {
    Consumer,
    Worker(WorkerProfile),
    ShopAdmin(NewShop),
}

impl AccountDetails {
    pub fn role(&self) -> Role {
        match self {
            AccountDetails::Consumer => Role::Consumer,
            AccountDetails::Worker(_) => Role::Worker,
            AccountDetails::ShopAdmin(_) => Role::ShopAdmin,
        }
    }
}

/// Input for creating an account together with its role-specific records
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub phone_number: String,
    pub name: String,
    pub hashed_password: String,
    pub details: AccountDetails,
}

impl NewAccount {
    pub fn role(&self) -> Role {
        self.details.role()
    }
}

/// Account row as shown in admin listings
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            phone_number: account.phone_number.clone(),
            created_at: account.created_at,
        }
    }
}

/// Worker row in admin listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerSummary {
    #[serde(flatten)]
    pub account: AccountSummary,
    pub worker_profile: Option<WorkerProfile>,
}

/// Contact details of the account managing a shop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopAdminContact {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
}

/// Shop row in admin listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopSummary {
    #[serde(flatten)]
    pub shop: Shop,
    pub admin: ShopAdminContact,
}
