//! Driving port for user lookups.
//!
//! HTTP handlers read users through this port without touching persistence
//! concerns.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, ResourceCode, ResourceUuid, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch a user by code, failing with `not_found` when absent.
    async fn get_by_code(&self, code: &ResourceCode) -> Result<User, Error>;

    /// Fetch a user by uuid, failing with `not_found` when absent.
    async fn get_by_uuid(&self, uuid: &ResourceUuid) -> Result<User, Error>;

    /// One page of users.
    async fn list(&self, request: PageRequest) -> Result<Page<User>, Error>;
}
