//! Response bodies with hypermedia links.
//!
//! Each resource is rendered field by field from its domain aggregate and
//! decorated with `_links` pointing at the endpoints that read, edit and
//! list it.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Disk, Drive, User};

use super::paths;

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Link {
    #[schema(example = "/v1/user/1234")]
    pub href: String,
}

impl Link {
    fn to(href: String) -> Self {
        Self { href }
    }
}

/// Links carried by user and drive representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResourceLinks {
    /// Canonical lookup by code.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// Target for `PATCH` and `DELETE`, addressed by uuid.
    pub edit: Link,
    /// The paginated collection.
    pub collection: Link,
    /// Disks of a drive; absent on users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disks: Option<Link>,
}

impl ResourceLinks {
    fn for_resource(collection: String, code: &str, uuid: &str) -> Self {
        Self {
            self_link: Link::to(format!("{collection}/{code}")),
            edit: Link::to(format!("{collection}/{uuid}")),
            collection: Link::to(collection),
            disks: None,
        }
    }
}

/// User representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub uuid: String,
    #[schema(example = "1234")]
    pub code: String,
    #[schema(example = "henk")]
    pub name: String,
    #[serde(rename = "_links")]
    pub links: ResourceLinks,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let links = ResourceLinks::for_resource(
            paths::user_collection(),
            user.code().as_ref(),
            user.uuid().as_ref(),
        );
        Self {
            uuid: user.uuid().to_string(),
            code: user.code().to_string(),
            name: user.name().to_string(),
            links,
        }
    }
}

/// Drive representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriveResponse {
    pub uuid: String,
    #[schema(example = "D1")]
    pub code: String,
    #[schema(example = "Main drive")]
    pub name: String,
    #[serde(rename = "_links")]
    pub links: ResourceLinks,
}

impl From<Drive> for DriveResponse {
    fn from(drive: Drive) -> Self {
        let mut links = ResourceLinks::for_resource(
            paths::drive_collection(),
            drive.code().as_ref(),
            drive.uuid().as_ref(),
        );
        links.disks = Some(Link::to(format!("{}/disks", links.self_link.href)));
        Self {
            uuid: drive.uuid().to_string(),
            code: drive.code().to_string(),
            name: drive.name().to_string(),
            links,
        }
    }
}

/// Disk representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiskResponse {
    pub uuid: String,
    /// Uuid of the drive holding the disk.
    pub drive_uuid: String,
}

impl From<Disk> for DiskResponse {
    fn from(disk: Disk) -> Self {
        Self {
            uuid: disk.uuid().to_string(),
            drive_uuid: disk.drive_uuid().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResourceCode, ResourceName, ResourceUuid};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn user_renders_links_by_code_and_uuid() {
        let user = User::new(
            ResourceUuid::new("test-uuid").expect("uuid"),
            ResourceCode::new("1234").expect("code"),
            ResourceName::new("henk").expect("name"),
        );

        let value = serde_json::to_value(UserResponse::from(user)).expect("serialise");
        assert_eq!(
            value,
            json!({
                "uuid": "test-uuid",
                "code": "1234",
                "name": "henk",
                "_links": {
                    "self": { "href": "/v1/user/1234" },
                    "edit": { "href": "/v1/user/test-uuid" },
                    "collection": { "href": "/v1/user" },
                },
            })
        );
    }

    #[rstest]
    fn drive_links_to_its_disks() {
        let drive = Drive::new(
            ResourceUuid::new("drive-1").expect("uuid"),
            ResourceCode::new("D1").expect("code"),
            ResourceName::new("Main").expect("name"),
        );

        let response = DriveResponse::from(drive);
        assert_eq!(
            response.links.disks.map(|link| link.href).as_deref(),
            Some("/v1/drive/D1/disks")
        );
    }
}
