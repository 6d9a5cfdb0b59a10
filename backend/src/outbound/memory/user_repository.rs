//! Mutex-guarded `UserRepository`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{ResourceCode, ResourceUuid, User};

use super::paginate;

/// Users kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::connection("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.lock()?;
        if users.iter().any(|u| u.uuid() == user.uuid()) {
            return Err(UserPersistenceError::duplicate_uuid(user.uuid().as_ref()));
        }
        if users.iter().any(|u| u.code() == user.code()) {
            return Err(UserPersistenceError::duplicate_code(user.code().as_ref()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut users = self.lock()?;
        if users
            .iter()
            .any(|u| u.uuid() != user.uuid() && u.code() == user.code())
        {
            return Err(UserPersistenceError::duplicate_code(user.code().as_ref()));
        }
        match users.iter_mut().find(|u| u.uuid() == user.uuid()) {
            Some(slot) => {
                *slot = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_uuid(
        &self,
        uuid: &ResourceUuid,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.iter().find(|u| u.uuid() == uuid).cloned())
    }

    async fn find_by_code(
        &self,
        code: &ResourceCode,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.iter().find(|u| u.code() == code).cloned())
    }

    async fn exists_by_code(&self, code: &ResourceCode) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.iter().any(|u| u.code() == code))
    }

    async fn list(&self, request: PageRequest) -> Result<Page<User>, UserPersistenceError> {
        Ok(paginate(&self.lock()?, request))
    }

    async fn delete_by_uuid(&self, uuid: &ResourceUuid) -> Result<bool, UserPersistenceError> {
        let mut users = self.lock()?;
        let before = users.len();
        users.retain(|u| u.uuid() != uuid);
        Ok(users.len() != before)
    }
}
