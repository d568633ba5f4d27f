//! PostgreSQL persistence adapter using Diesel.
//!
//! Row structs and table definitions stay private to this module; the domain
//! only sees [`DieselUserRecordRepository`] through its port.
//!
//! # Example
//!
//! ```ignore
//! use profile_registry::outbound::persistence::{DbPool, DieselUserRecordRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/profiles")).await?;
//! let repo = DieselUserRecordRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_user_record_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_record_repository::DieselUserRecordRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
