//! Mutex-guarded `DriveRepository`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{DriveRepository, DriveRepositoryError};
use crate::domain::{Disk, Drive, ResourceCode, ResourceUuid};

use super::paginate;

#[derive(Debug, Default)]
struct Store {
    drives: Vec<Drive>,
    disks: Vec<Disk>,
}

impl Store {
    fn check_new_drive(&self, drive: &Drive) -> Result<(), DriveRepositoryError> {
        if self.drives.iter().any(|d| d.uuid() == drive.uuid()) {
            return Err(DriveRepositoryError::duplicate_uuid(drive.uuid().as_ref()));
        }
        if self.drives.iter().any(|d| d.code() == drive.code()) {
            return Err(DriveRepositoryError::duplicate_code(drive.code().as_ref()));
        }
        Ok(())
    }
}

/// Drives and disks kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDriveRepository {
    store: Mutex<Store>,
}

impl InMemoryDriveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, DriveRepositoryError> {
        self.store
            .lock()
            .map_err(|_| DriveRepositoryError::connection("drive store lock poisoned"))
    }
}

#[async_trait]
impl DriveRepository for InMemoryDriveRepository {
    async fn insert(&self, drive: &Drive) -> Result<(), DriveRepositoryError> {
        let mut store = self.lock()?;
        store.check_new_drive(drive)?;
        store.drives.push(drive.clone());
        Ok(())
    }

    async fn insert_with_disk(
        &self,
        drive: &Drive,
        disk: &Disk,
    ) -> Result<(), DriveRepositoryError> {
        let mut store = self.lock()?;
        store.check_new_drive(drive)?;
        if store.disks.iter().any(|d| d.uuid() == disk.uuid()) {
            return Err(DriveRepositoryError::duplicate_disk_uuid(disk.uuid().as_ref()));
        }
        store.drives.push(drive.clone());
        store.disks.push(disk.clone());
        Ok(())
    }

    async fn update(&self, drive: &Drive) -> Result<bool, DriveRepositoryError> {
        let mut store = self.lock()?;
        if store
            .drives
            .iter()
            .any(|d| d.uuid() != drive.uuid() && d.code() == drive.code())
        {
            return Err(DriveRepositoryError::duplicate_code(drive.code().as_ref()));
        }
        match store.drives.iter_mut().find(|d| d.uuid() == drive.uuid()) {
            Some(slot) => {
                *slot = drive.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_uuid(
        &self,
        uuid: &ResourceUuid,
    ) -> Result<Option<Drive>, DriveRepositoryError> {
        Ok(self.lock()?.drives.iter().find(|d| d.uuid() == uuid).cloned())
    }

    async fn find_by_code(
        &self,
        code: &ResourceCode,
    ) -> Result<Option<Drive>, DriveRepositoryError> {
        Ok(self.lock()?.drives.iter().find(|d| d.code() == code).cloned())
    }

    async fn exists_by_code(&self, code: &ResourceCode) -> Result<bool, DriveRepositoryError> {
        Ok(self.lock()?.drives.iter().any(|d| d.code() == code))
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Drive>, DriveRepositoryError> {
        Ok(paginate(&self.lock()?.drives, request))
    }

    async fn disks_for_drive(
        &self,
        drive_uuid: &ResourceUuid,
    ) -> Result<Vec<Disk>, DriveRepositoryError> {
        Ok(self
            .lock()?
            .disks
            .iter()
            .filter(|disk| disk.drive_uuid() == drive_uuid)
            .cloned()
            .collect())
    }

    async fn delete_by_uuid(&self, uuid: &ResourceUuid) -> Result<bool, DriveRepositoryError> {
        let mut store = self.lock()?;
        let before = store.drives.len();
        store.drives.retain(|d| d.uuid() != uuid);
        if store.drives.len() == before {
            return Ok(false);
        }
        store.disks.retain(|disk| disk.drive_uuid() != uuid);
        Ok(true)
    }
}
