//! Drive domain service.
//!
//! Mirrors the user service and adds the drive-with-disk creation flow and
//! the disk listing.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::info;

use crate::domain::ports::{DriveCommand, DriveQuery, DriveRepository, DriveRepositoryError};
use crate::domain::{
    Disk, DiskDraft, Drive, Error, ResourceCode, ResourceDraft, ResourcePatch, ResourceUuid,
};

fn map_repository_error(error: DriveRepositoryError) -> Error {
    match error {
        DriveRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("drive repository unavailable: {message}"))
        }
        DriveRepositoryError::Query { message } => {
            Error::internal(format!("drive repository error: {message}"))
        }
        DriveRepositoryError::DuplicateCode { code } => code_taken(&code),
        DriveRepositoryError::DuplicateUuid { uuid } => {
            Error::conflict(format!("uuid '{uuid}' already exists"))
        }
        DriveRepositoryError::DuplicateDiskUuid { uuid } => {
            Error::conflict(format!("disk uuid '{uuid}' already exists"))
        }
    }
}

fn code_taken(code: &str) -> Error {
    Error::conflict(format!("code '{code}' already exists"))
}

fn code_not_found(code: &ResourceCode) -> Error {
    Error::not_found(format!("drive with code '{code}' not found"))
}

fn uuid_not_found(uuid: &ResourceUuid) -> Error {
    Error::not_found(format!("drive with uuid '{uuid}' not found"))
}

/// Drive service implementing [`DriveQuery`] and [`DriveCommand`].
#[derive(Clone)]
pub struct DriveService<R> {
    drive_repo: Arc<R>,
}

impl<R> DriveService<R> {
    /// Create a service backed by `drive_repo`.
    pub fn new(drive_repo: Arc<R>) -> Self {
        Self { drive_repo }
    }
}

impl<R> DriveService<R>
where
    R: DriveRepository,
{
    async fn ensure_code_free(&self, code: &ResourceCode) -> Result<(), Error> {
        if self
            .drive_repo
            .exists_by_code(code)
            .await
            .map_err(map_repository_error)?
        {
            return Err(code_taken(code.as_ref()));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> DriveQuery for DriveService<R>
where
    R: DriveRepository,
{
    async fn get_by_code(&self, code: &ResourceCode) -> Result<Drive, Error> {
        self.drive_repo
            .find_by_code(code)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| code_not_found(code))
    }

    async fn get_by_uuid(&self, uuid: &ResourceUuid) -> Result<Drive, Error> {
        self.drive_repo
            .find_by_uuid(uuid)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| uuid_not_found(uuid))
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Drive>, Error> {
        self.drive_repo
            .list(request)
            .await
            .map_err(map_repository_error)
    }

    async fn disks(&self, code: &ResourceCode) -> Result<Vec<Disk>, Error> {
        let drive = self.get_by_code(code).await?;
        self.drive_repo
            .disks_for_drive(drive.uuid())
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> DriveCommand for DriveService<R>
where
    R: DriveRepository,
{
    async fn create(&self, draft: ResourceDraft) -> Result<Drive, Error> {
        self.ensure_code_free(&draft.code).await?;

        let drive = Drive::from_draft(draft);
        self.drive_repo
            .insert(&drive)
            .await
            .map_err(map_repository_error)?;
        info!(uuid = %drive.uuid(), code = %drive.code(), "drive created");
        Ok(drive)
    }

    async fn create_with_disk(
        &self,
        draft: ResourceDraft,
        disk: DiskDraft,
    ) -> Result<Drive, Error> {
        self.ensure_code_free(&draft.code).await?;

        let drive = Drive::from_draft(draft);
        let disk = Disk::attach(disk, &drive);
        self.drive_repo
            .insert_with_disk(&drive, &disk)
            .await
            .map_err(map_repository_error)?;
        info!(uuid = %drive.uuid(), disk = %disk.uuid(), "drive created with disk");
        Ok(drive)
    }

    async fn patch(&self, uuid: &ResourceUuid, patch: ResourcePatch) -> Result<Drive, Error> {
        let mut drive = self.get_by_uuid(uuid).await?;
        let new_code = patch.changed_code(drive.code()).cloned();

        patch
            .apply(&mut drive)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        if let Some(code) = new_code {
            self.ensure_code_free(&code).await?;
        }

        if !self
            .drive_repo
            .update(&drive)
            .await
            .map_err(map_repository_error)?
        {
            return Err(uuid_not_found(uuid));
        }
        Ok(drive)
    }

    async fn delete(&self, uuid: &ResourceUuid) -> Result<(), Error> {
        let deleted = self
            .drive_repo
            .delete_by_uuid(uuid)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(uuid_not_found(uuid));
        }
        info!(%uuid, "drive deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "drive_service_tests.rs"]
mod tests;
