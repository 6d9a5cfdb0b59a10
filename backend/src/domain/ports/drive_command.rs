//! Driving port for drive mutations.

use async_trait::async_trait;

use crate::domain::{DiskDraft, Drive, Error, ResourceDraft, ResourcePatch, ResourceUuid};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriveCommand: Send + Sync {
    /// Create a drive, failing with `conflict` when the code is taken.
    async fn create(&self, draft: ResourceDraft) -> Result<Drive, Error>;

    /// Create a drive together with one disk.
    async fn create_with_disk(&self, draft: ResourceDraft, disk: DiskDraft)
    -> Result<Drive, Error>;

    /// Apply a partial update to the drive with `uuid`.
    async fn patch(&self, uuid: &ResourceUuid, patch: ResourcePatch) -> Result<Drive, Error>;

    /// Delete the drive with `uuid` and its disks.
    async fn delete(&self, uuid: &ResourceUuid) -> Result<(), Error>;
}
