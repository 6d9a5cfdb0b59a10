//! Request payload parsing shared by the resource handlers.
//!
//! Handlers receive loosely typed JSON and path segments; this module turns
//! them into validated domain drafts and patches, reporting the offending
//! field in the error details.

use pagination::{PageParams, PageRequest};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    DiskDraft, Error, ResourceCode, ResourceDraft, ResourceName, ResourcePatch, ResourceUuid,
    ResourceValidationError,
};

/// Machine-readable codes placed in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidField,
    InvalidPaging,
    MalformedRequest,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidField => "invalid_field",
            Self::InvalidPaging => "invalid_paging",
            Self::MalformedRequest => "malformed_request",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

const CODE: FieldName = FieldName::new("code");
const NAME: FieldName = FieldName::new("name");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let FieldName(field) = field;
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_field_error(err: &ResourceValidationError, value: &str) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "value": value,
        "code": ValidationCode::InvalidField.as_str(),
    }))
}

/// Error for bodies, paths or query strings the extractors could not decode.
pub(crate) fn malformed_request_error(source: &str, reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("malformed {source}: {reason}")).with_details(json!({
        "code": ValidationCode::MalformedRequest.as_str(),
    }))
}

pub(crate) fn parse_uuid(raw: String) -> Result<ResourceUuid, Error> {
    ResourceUuid::new(raw.as_str()).map_err(|err| invalid_field_error(&err, &raw))
}

pub(crate) fn parse_code(raw: String) -> Result<ResourceCode, Error> {
    ResourceCode::new(raw.as_str()).map_err(|err| invalid_field_error(&err, &raw))
}

fn parse_name(raw: String) -> Result<ResourceName, Error> {
    ResourceName::new(raw.as_str()).map_err(|err| invalid_field_error(&err, &raw))
}

pub(crate) fn parse_page(params: PageParams) -> Result<PageRequest, Error> {
    PageRequest::try_from(params).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": ValidationCode::InvalidPaging.as_str(),
        }))
    })
}

/// Body accepted by create and patch endpoints for users and drives.
///
/// Example JSON: `{"code":"1234","name":"henk"}`
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
    /// Optional identifier; generated on create when omitted.
    pub uuid: Option<String>,
    /// Business key; required on create.
    pub code: Option<String>,
    /// Display name; required on create.
    pub name: Option<String>,
}

/// Body accepted by `POST /v1/drive/with-disk`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriveWithDiskRequest {
    pub uuid: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    /// The disk to create inside the drive; defaults to a fresh uuid.
    pub disk: Option<DiskRequest>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiskRequest {
    pub uuid: Option<String>,
}

impl TryFrom<ResourceRequest> for ResourceDraft {
    type Error = Error;

    fn try_from(value: ResourceRequest) -> Result<Self, Self::Error> {
        let ResourceRequest { uuid, code, name } = value;
        Ok(Self {
            uuid: uuid.map(parse_uuid).transpose()?,
            code: parse_code(code.ok_or_else(|| missing_field_error(CODE))?)?,
            name: parse_name(name.ok_or_else(|| missing_field_error(NAME))?)?,
        })
    }
}

impl TryFrom<ResourceRequest> for ResourcePatch {
    type Error = Error;

    fn try_from(value: ResourceRequest) -> Result<Self, Self::Error> {
        let ResourceRequest { uuid, code, name } = value;
        Ok(Self {
            uuid: uuid.map(parse_uuid).transpose()?,
            code: code.map(parse_code).transpose()?,
            name: name.map(parse_name).transpose()?,
        })
    }
}

/// Validate a PATCH body received as loose JSON.
///
/// Handlers deserialise the body only after the target resource is known
/// to exist, so shape errors surface as 400 rather than masking a 404.
pub(crate) fn parse_patch(body: serde_json::Value) -> Result<ResourcePatch, Error> {
    let request: ResourceRequest =
        serde_json::from_value(body).map_err(|err| malformed_request_error("body", err))?;
    ResourcePatch::try_from(request)
}

impl DriveWithDiskRequest {
    /// Validate the body into the drive draft and its disk draft.
    pub(crate) fn into_drafts(self) -> Result<(ResourceDraft, DiskDraft), Error> {
        let Self {
            uuid,
            code,
            name,
            disk,
        } = self;
        let draft = ResourceDraft::try_from(ResourceRequest { uuid, code, name })?;
        let disk = DiskDraft {
            uuid: disk.and_then(|d| d.uuid).map(parse_uuid).transpose()?,
        };
        Ok((draft, disk))
    }
}
