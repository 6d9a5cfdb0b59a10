//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, ResourceDraft, ResourcePatch, ResourceUuid, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Create a user, failing with `conflict` when the code is taken.
    async fn create(&self, draft: ResourceDraft) -> Result<User, Error>;

    /// Apply a partial update to the user with `uuid`.
    async fn patch(&self, uuid: &ResourceUuid, patch: ResourcePatch) -> Result<User, Error>;

    /// Delete the user with `uuid`.
    async fn delete(&self, uuid: &ResourceUuid) -> Result<(), Error>;
}
