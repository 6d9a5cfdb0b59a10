//! Domain primitives, aggregates, ports and services.
//!
//! Nothing in here knows about HTTP or SQL. Inbound adapters call the
//! services through the driving ports in [`ports`]; outbound adapters
//! implement the repository ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport agnostic failure payload.
//! - [`Drive`], [`Disk`], [`User`]: the managed aggregates.
//! - [`ResourceUuid`], [`ResourceCode`], [`ResourceName`]: validated fields.
//! - [`ResourcePatch`]: partial update semantics.
//! - [`DriveService`], [`UserService`]: driving port implementations.

pub mod drive;
pub mod drive_service;
pub mod error;
pub mod ports;
pub mod resource;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::drive::{Disk, DiskDraft, Drive};
pub use self::drive_service::DriveService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::resource::{
    CODE_MAX, NAME_MAX, PatchError, Resource, ResourceCode, ResourceDraft, ResourceName,
    ResourcePatch, ResourceUuid, ResourceValidationError, UUID_MAX,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;
pub use self::user_service::UserService;
