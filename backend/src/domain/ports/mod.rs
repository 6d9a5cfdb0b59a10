//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Query`, `*Command`) are implemented by the domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod drive_command;
mod drive_query;
mod drive_repository;
mod user_command;
mod user_query;
mod user_repository;

pub use drive_command::DriveCommand;
#[cfg(test)]
pub use drive_command::MockDriveCommand;
pub use drive_query::DriveQuery;
#[cfg(test)]
pub use drive_query::MockDriveQuery;
#[cfg(test)]
pub use drive_repository::MockDriveRepository;
pub use drive_repository::{DriveRepository, DriveRepositoryError};
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_command::MockUserCommand;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
