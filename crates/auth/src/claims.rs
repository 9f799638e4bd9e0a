//! Session token claims and the closed set of account roles

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capability class of a principal.
///
/// Assigned once at account creation; a session token carries a snapshot of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Consumer,
    Worker,
    ShopAdmin,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Consumer => "consumer",
            Role::Worker => "worker",
            Role::ShopAdmin => "shop_admin",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity fields bound into a session token at issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub role: Role,
    /// Contact identifier, carried for display only
    pub phone: String,
}

/// Decoded session token payload.
///
/// Field names match the wire format: `{"userId", "role", "phone", "iat", "exp"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub role: Role,
    pub phone: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            user_id: self.user_id,
            role: self.role,
            phone: self.phone.clone(),
        }
    }
}
