//! Outbound adapters implementing the domain repository ports.
//!
//! - [`persistence`]: PostgreSQL repositories on Diesel.
//! - [`memory`]: in-process repositories for database-less runs and tests.
//!
//! Adapters only translate between domain types and storage; they hold no
//! business rules.

pub mod memory;
pub mod persistence;
