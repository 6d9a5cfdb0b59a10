//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories run on `diesel-async` connections checked out of a `bb8`
//! pool. Row structs ([`models`]) and table definitions ([`schema`]) are
//! private to this module; only domain types cross the port boundary, and
//! every Diesel failure is mapped onto the owning port's error enum.
//!
//! # Example
//!
//! ```no_run
//! use library_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/library")).await?;
//! let _users = DieselUserRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_drive_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_drive_repository::DieselDriveRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
