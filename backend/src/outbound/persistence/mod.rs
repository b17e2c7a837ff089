//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories here only translate between Diesel rows and domain records.
//! Row structs (`models.rs`) and the table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`, and every database failure is mapped onto
//! [`RepositoryError`](crate::domain::ports::RepositoryError).
//!
//! # Example
//!
//! ```ignore
//! use insurance_backend::outbound::persistence::{
//!     DbPool, DieselPolicyRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! run_pending_migrations("postgres://localhost/insurance").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/insurance")).await?;
//! let policies = DieselPolicyRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_policy_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_policy_repository::DieselPolicyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
