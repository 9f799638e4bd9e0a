//! Accounts domain layer: entities and signup details

pub mod entities;
