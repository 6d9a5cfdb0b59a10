//! User aggregate.

use super::resource::{Resource, ResourceCode, ResourceDraft, ResourceName, ResourceUuid};

/// A user known to the library.
///
/// Users are independent of drives; they share only the identity triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    uuid: ResourceUuid,
    code: ResourceCode,
    name: ResourceName,
}

impl User {
    /// Build a user from validated parts.
    pub fn new(uuid: ResourceUuid, code: ResourceCode, name: ResourceName) -> Self {
        Self { uuid, code, name }
    }

    /// Build a user from a creation draft, generating a uuid if absent.
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

impl Resource for User {
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
