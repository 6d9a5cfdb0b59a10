//! Driving port for drive lookups.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Disk, Drive, Error, ResourceCode, ResourceUuid};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriveQuery: Send + Sync {
    /// Fetch a drive by code, failing with `not_found` when absent.
    async fn get_by_code(&self, code: &ResourceCode) -> Result<Drive, Error>;

    /// Fetch a drive by uuid, failing with `not_found` when absent.
    async fn get_by_uuid(&self, uuid: &ResourceUuid) -> Result<Drive, Error>;

    /// One page of drives.
    async fn list(&self, request: PageRequest) -> Result<Page<Drive>, Error>;

    /// Disks of the drive with `code`.
    async fn disks(&self, code: &ResourceCode) -> Result<Vec<Disk>, Error>;
}
