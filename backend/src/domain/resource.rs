//! Identity and naming primitives shared by drives and users.
//!
//! Every managed resource carries the same triple: an opaque `uuid`, a
//! business `code` that is unique per resource kind, and a human readable
//! `name`. The newtypes here validate those fields once at the edge so the
//! services and adapters can rely on them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a resource uuid.
pub const UUID_MAX: usize = 64;
/// Maximum length of a resource code.
pub const CODE_MAX: usize = 64;
/// Maximum length of a resource name.
pub const NAME_MAX: usize = 255;

/// Validation errors raised by the resource newtypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceValidationError {
    EmptyUuid,
    InvalidUuid,
    UuidTooLong { max: usize },
    EmptyCode,
    InvalidCode,
    CodeTooLong { max: usize },
    EmptyName,
    NameTooLong { max: usize },
}

impl ResourceValidationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUuid | Self::InvalidUuid | Self::UuidTooLong { .. } => "uuid",
            Self::EmptyCode | Self::InvalidCode | Self::CodeTooLong { .. } => "code",
            Self::EmptyName | Self::NameTooLong { .. } => "name",
        }
    }
}

impl fmt::Display for ResourceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUuid => write!(f, "uuid must not be empty"),
            Self::InvalidUuid => write!(f, "uuid may only contain ASCII letters, digits, '-', '.', '_' or '~'"),
            Self::UuidTooLong { max } => write!(f, "uuid must be at most {max} characters"),
            Self::EmptyCode => write!(f, "code must not be empty"),
            Self::InvalidCode => write!(f, "code may only contain ASCII letters, digits, '-', '.', '_' or '~'"),
            Self::CodeTooLong { max } => write!(f, "code must be at most {max} characters"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
        }
    }
}

impl std::error::Error for ResourceValidationError {}

/// Uuids and codes appear verbatim in URL path segments and `Location`
/// headers, so they are limited to the RFC 3986 unreserved characters.
fn is_path_safe(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
}

/// Externally visible identifier of a resource.
///
/// The value is opaque: it does not have to be an RFC 4122 UUID, only a
/// non-empty token of unreserved URL characters. Fresh identifiers are random v4
/// UUIDs.
///
/// # Examples
/// ```
/// use library_api::domain::ResourceUuid;
///
/// let uuid = ResourceUuid::new("f3as5jj-8819-9952-b3ds-l0os8iwwejsa").expect("valid uuid");
/// assert_eq!(uuid.as_ref(), "f3as5jj-8819-9952-b3ds-l0os8iwwejsa");
/// assert!(ResourceUuid::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceUuid(String);

impl ResourceUuid {
    /// Validate and construct a [`ResourceUuid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ResourceValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ResourceValidationError::EmptyUuid);
        }
        if !is_path_safe(&value) {
            return Err(ResourceValidationError::InvalidUuid);
        }
        if value.chars().count() > UUID_MAX {
            return Err(ResourceValidationError::UuidTooLong { max: UUID_MAX });
        }
        Ok(Self(value))
    }

    /// Generate a random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Unique business key of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceCode(String);

impl ResourceCode {
    /// Validate and construct a [`ResourceCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ResourceValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ResourceValidationError::EmptyCode);
        }
        if !is_path_safe(&value) {
            return Err(ResourceValidationError::InvalidCode);
        }
        if value.chars().count() > CODE_MAX {
            return Err(ResourceValidationError::CodeTooLong { max: CODE_MAX });
        }
        Ok(Self(value))
    }
}

/// Human readable resource name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate and construct a [`ResourceName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ResourceValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ResourceValidationError::EmptyName);
        }
        if value.chars().count() > NAME_MAX {
            return Err(ResourceValidationError::NameTooLong { max: NAME_MAX });
        }
        Ok(Self(value))
    }
}

macro_rules! string_newtype_conversions {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    self.0.as_str()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl TryFrom<String> for $ty {
                type Error = ResourceValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }
        )+
    };
}

string_newtype_conversions!(ResourceUuid, ResourceCode, ResourceName);

/// Validated input for creating a resource.
///
/// `uuid` is optional; services assign [`ResourceUuid::random`] when the
/// caller leaves it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    pub uuid: Option<ResourceUuid>,
    pub code: ResourceCode,
    pub name: ResourceName,
}

/// Fields shared by every patchable resource.
pub trait Resource {
    /// Current identifier.
    fn uuid(&self) -> &ResourceUuid;
    /// Current business key.
    fn code(&self) -> &ResourceCode;
    /// Replace the business key.
    fn set_code(&mut self, code: ResourceCode);
    /// Replace the display name.
    fn set_name(&mut self, name: ResourceName);
}

/// Reasons a patch cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// The patch tried to move the resource to another uuid.
    #[error("uuid is immutable")]
    UuidImmutable,
}

/// Partial update: only present fields overwrite the stored value.
///
/// # Examples
/// ```
/// use library_api::domain::{ResourceName, ResourcePatch};
///
/// let patch = ResourcePatch {
///     name: Some(ResourceName::new("Archive").expect("valid name")),
///     ..ResourcePatch::default()
/// };
/// assert!(patch.code.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePatch {
    pub uuid: Option<ResourceUuid>,
    pub code: Option<ResourceCode>,
    pub name: Option<ResourceName>,
}

impl ResourcePatch {
    /// Code the patch would assign, when it differs from `current`.
    pub fn changed_code(&self, current: &ResourceCode) -> Option<&ResourceCode> {
        self.code.as_ref().filter(|code| *code != current)
    }

    /// Apply the present fields to `target`.
    ///
    /// A uuid equal to the current one is accepted; a different uuid leaves
    /// `target` untouched and fails with [`PatchError::UuidImmutable`].
    pub fn apply<T: Resource>(self, target: &mut T) -> Result<(), PatchError> {
        if self.uuid.as_ref().is_some_and(|uuid| uuid != target.uuid()) {
            return Err(PatchError::UuidImmutable);
        }
        if let Some(code) = self.code {
            target.set_code(code);
        }
        if let Some(name) = self.name {
            target.set_name(name);
        }
        Ok(())
    }
}
