//! Port abstraction for drive persistence, including the disks a drive owns.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Disk, Drive, ResourceCode, ResourceUuid};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by drive repository adapters.
    pub enum DriveRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "drive repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "drive repository query failed: {message}",
        /// Another drive already holds the code.
        DuplicateCode { code: String } => "drive code '{code}' already exists",
        /// Another drive already holds the uuid.
        DuplicateUuid { uuid: String } => "drive uuid '{uuid}' already exists",
        /// Another disk already holds the uuid.
        DuplicateDiskUuid { uuid: String } => "disk uuid '{uuid}' already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriveRepository: Send + Sync {
    /// Store a new drive without disks.
    async fn insert(&self, drive: &Drive) -> Result<(), DriveRepositoryError>;

    /// Store a drive and one disk atomically.
    ///
    /// Either both rows are written or neither is.
    async fn insert_with_disk(&self, drive: &Drive, disk: &Disk)
    -> Result<(), DriveRepositoryError>;

    /// Overwrite the stored drive sharing `drive`'s uuid.
    ///
    /// Returns `false` when no such drive exists.
    async fn update(&self, drive: &Drive) -> Result<bool, DriveRepositoryError>;

    /// Fetch a drive by uuid.
    async fn find_by_uuid(&self, uuid: &ResourceUuid)
    -> Result<Option<Drive>, DriveRepositoryError>;

    /// Fetch a drive by code.
    async fn find_by_code(&self, code: &ResourceCode)
    -> Result<Option<Drive>, DriveRepositoryError>;

    /// Whether any drive holds `code`.
    async fn exists_by_code(&self, code: &ResourceCode) -> Result<bool, DriveRepositoryError>;

    /// One page of drives in insertion order.
    async fn list(&self, request: PageRequest) -> Result<Page<Drive>, DriveRepositoryError>;

    /// Disks belonging to the drive with `drive_uuid`, in insertion order.
    async fn disks_for_drive(
        &self,
        drive_uuid: &ResourceUuid,
    ) -> Result<Vec<Disk>, DriveRepositoryError>;

    /// Remove a drive and its disks; returns `false` when nothing was deleted.
    async fn delete_by_uuid(&self, uuid: &ResourceUuid) -> Result<bool, DriveRepositoryError>;
}
