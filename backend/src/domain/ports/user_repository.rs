//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{ResourceCode, ResourceUuid, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the code.
        DuplicateCode { code: String } => "user code '{code}' already exists",
        /// Another user already holds the uuid.
        DuplicateUuid { uuid: String } => "user uuid '{uuid}' already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Overwrite the stored user sharing `user`'s uuid.
    ///
    /// Returns `false` when no such user exists.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;

    /// Fetch a user by uuid.
    async fn find_by_uuid(&self, uuid: &ResourceUuid)
    -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by code.
    async fn find_by_code(&self, code: &ResourceCode)
    -> Result<Option<User>, UserPersistenceError>;

    /// Whether any user holds `code`.
    async fn exists_by_code(&self, code: &ResourceCode) -> Result<bool, UserPersistenceError>;

    /// One page of users in insertion order.
    async fn list(&self, request: PageRequest) -> Result<Page<User>, UserPersistenceError>;

    /// Remove a user; returns `false` when nothing was deleted.
    async fn delete_by_uuid(&self, uuid: &ResourceUuid) -> Result<bool, UserPersistenceError>;
}
