//! PostgreSQL persistence adapter.
//!
//! Diesel row structs and table definitions stay private to this module; the
//! rest of the crate only sees [`DieselUserRepository`] through the
//! `UserRepository` port, plus the pool and migration plumbing the binary
//! needs at startup.

mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
