//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Which credential store backs the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL`
    Postgres { database_url: String },
    /// Process-local store, lost on restart
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Credential store selection (`STORE`, `DATABASE_URL`)
    pub store: StoreBackend,

    /// Session token signing secret. `None` means sessions fail closed.
    #[serde(skip_serializing)]
    pub jwt_secret: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let store = match env::var("STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            Ok("postgres") | Err(_) => StoreBackend::Postgres {
                database_url: env::var("DATABASE_URL")
                    .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,
            },
            Ok(other) => anyhow::bail!("Unknown STORE backend: {}", other),
        };

        let config = Self {
            store,
            jwt_secret: non_empty(env::var("JWT_SECRET").ok()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info,marketplace_auth=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

/// An empty secret signs nothing; treat it the same as an unset one.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
