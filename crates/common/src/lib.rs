//! Shared utilities, configuration, and error handling for the marketplace
//!
//! This crate provides common functionality used across the application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors (pagination, validated JSON)
//! - Password hashing

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;

pub use crypto::{hash_password, verify_password};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{PageMeta, Pagination, ValidatedJson};
