//! Drive aggregate and the disks it owns.
//!
//! A drive is a named storage unit with zero or more disks. Disks only carry
//! an identifier and the uuid of the drive they belong to; they are created
//! together with their drive and disappear with it.

use super::resource::{Resource, ResourceCode, ResourceDraft, ResourceName, ResourceUuid};

/// A storage drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    uuid: ResourceUuid,
    code: ResourceCode,
    name: ResourceName,
}

impl Drive {
    /// Build a drive from validated parts.
    pub fn new(uuid: ResourceUuid, code: ResourceCode, name: ResourceName) -> Self {
        Self { uuid, code, name }
    }

    /// Build a drive from a creation draft, generating a uuid if absent.
    pub fn from_draft(draft: ResourceDraft) -> Self {
        let ResourceDraft { uuid, code, name } = draft;
        Self::new(uuid.unwrap_or_else(ResourceUuid::random), code, name)
    }

    pub fn uuid(&self) -> &ResourceUuid {
        &self.uuid
    }

    pub fn code(&self) -> &ResourceCode {
        &self.code
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }
}

impl Resource for Drive {
    fn uuid(&self) -> &ResourceUuid {
        &self.uuid
    }

    fn code(&self) -> &ResourceCode {
        &self.code
    }

    fn set_code(&mut self, code: ResourceCode) {
        self.code = code;
    }

    fn set_name(&mut self, name: ResourceName) {
        self.name = name;
    }
}

/// A disk mounted in exactly one drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    uuid: ResourceUuid,
    drive_uuid: ResourceUuid,
}

impl Disk {
    pub fn new(uuid: ResourceUuid, drive_uuid: ResourceUuid) -> Self {
        Self { uuid, drive_uuid }
    }

    /// Attach a disk draft to `drive`.
    ///
    /// # Examples
    /// ```
    /// use library_api::domain::{
    ///     DiskDraft, Drive, ResourceCode, ResourceName, ResourceUuid, Disk,
    /// };
    ///
    /// let drive = Drive::new(
    ///     ResourceUuid::new("drive-1").expect("uuid"),
    ///     ResourceCode::new("D1").expect("code"),
    ///     ResourceName::new("Main").expect("name"),
    /// );
    /// let disk = Disk::attach(DiskDraft::default(), &drive);
    /// assert_eq!(disk.drive_uuid(), drive.uuid());
    /// ```
    pub fn attach(draft: DiskDraft, drive: &Drive) -> Self {
        Self::new(
            draft.uuid.unwrap_or_else(ResourceUuid::random),
            drive.uuid().clone(),
        )
    }

    pub fn uuid(&self) -> &ResourceUuid {
        &self.uuid
    }

    /// Uuid of the owning drive.
    pub fn drive_uuid(&self) -> &ResourceUuid {
        &self.drive_uuid
    }
}

/// Input for the disk created alongside a drive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskDraft {
    pub uuid: Option<ResourceUuid>,
}
