//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/v1` handler, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds and `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::representation::{
    DiskResponse, DriveResponse, Link, ResourceLinks, UserResponse,
};
use crate::inbound::http::schemas::{
    DrivePageSchema, ErrorCodeSchema, ErrorSchema, UserPageSchema,
};
use crate::inbound::http::validation::{DiskRequest, DriveWithDiskRequest, ResourceRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        description = "CRUD endpoints for drives and users with hypermedia links."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::patch_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::drives::list_drives,
        crate::inbound::http::drives::get_drive,
        crate::inbound::http::drives::list_disks,
        crate::inbound::http::drives::create_drive,
        crate::inbound::http::drives::create_drive_with_disk,
        crate::inbound::http::drives::patch_drive,
        crate::inbound::http::drives::delete_drive,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserPageSchema,
        DrivePageSchema,
        UserResponse,
        DriveResponse,
        DiskResponse,
        ResourceLinks,
        Link,
        ResourceRequest,
        DriveWithDiskRequest,
        DiskRequest,
    )),
    tags(
        (name = "users", description = "User resources"),
        (name = "drives", description = "Drive resources and their disks"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
