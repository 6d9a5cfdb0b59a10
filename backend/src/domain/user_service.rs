//! User domain service.
//!
//! Implements the user driving ports on top of a [`UserRepository`],
//! enforcing code uniqueness and partial-update rules.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::info;

use crate::domain::ports::{UserCommand, UserPersistenceError, UserQuery, UserRepository};
use crate::domain::{Error, ResourceCode, ResourceDraft, ResourcePatch, ResourceUuid, User};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateCode { code } => code_taken(&code),
        UserPersistenceError::DuplicateUuid { uuid } => {
            Error::conflict(format!("uuid '{uuid}' already exists"))
        }
    }
}

fn code_taken(code: &str) -> Error {
    Error::conflict(format!("code '{code}' already exists"))
}

fn uuid_not_found(uuid: &ResourceUuid) -> Error {
    Error::not_found(format!("user with uuid '{uuid}' not found"))
}

/// User service implementing [`UserQuery`] and [`UserCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service backed by `user_repo`.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    async fn ensure_code_free(&self, code: &ResourceCode) -> Result<(), Error> {
        let taken = self
            .user_repo
            .exists_by_code(code)
            .await
            .map_err(map_repository_error)?;
        if taken {
            return Err(code_taken(code.as_ref()));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> UserQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get_by_code(&self, code: &ResourceCode) -> Result<User, Error> {
        self.user_repo
            .find_by_code(code)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user with code '{code}' not found")))
    }

    async fn get_by_uuid(&self, uuid: &ResourceUuid) -> Result<User, Error> {
        self.user_repo
            .find_by_uuid(uuid)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| uuid_not_found(uuid))
    }

    async fn list(&self, request: PageRequest) -> Result<Page<User>, Error> {
        self.user_repo
            .list(request)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create(&self, draft: ResourceDraft) -> Result<User, Error> {
        self.ensure_code_free(&draft.code).await?;

        let user = User::from_draft(draft);
        self.user_repo
            .insert(&user)
            .await
            .map_err(map_repository_error)?;
        info!(uuid = %user.uuid(), code = %user.code(), "user created");
        Ok(user)
    }

    async fn patch(&self, uuid: &ResourceUuid, patch: ResourcePatch) -> Result<User, Error> {
        let mut user = self.get_by_uuid(uuid).await?;
        let new_code = patch.changed_code(user.code()).cloned();

        patch
            .apply(&mut user)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        if let Some(code) = new_code {
            self.ensure_code_free(&code).await?;
        }

        let updated = self
            .user_repo
            .update(&user)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(uuid_not_found(uuid));
        }
        Ok(user)
    }

    async fn delete(&self, uuid: &ResourceUuid) -> Result<(), Error> {
        let deleted = self
            .user_repo
            .delete_by_uuid(uuid)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(uuid_not_found(uuid));
        }
        info!(%uuid, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
