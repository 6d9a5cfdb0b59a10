//! Drive resource handlers.
//!
//! ```text
//! GET    /v1/drive?page=0&size=20
//! GET    /v1/drive/{code}
//! GET    /v1/drive/{code}/disks
//! POST   /v1/drive              {"code":"D1","name":"Main"}
//! POST   /v1/drive/with-disk    {"code":"D1","name":"Main","disk":{"uuid":"k1"}}
//! PATCH  /v1/drive/{uuid}
//! DELETE /v1/drive/{uuid}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use pagination::{Page, PageParams};

use crate::domain::{Drive, ResourceDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::representation::{DiskResponse, DriveResponse};
use crate::inbound::http::schemas::{DrivePageSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    DriveWithDiskRequest, ResourceRequest, parse_code, parse_page, parse_patch, parse_uuid,
};

fn created(drive: Drive) -> HttpResponse {
    let body = DriveResponse::from(drive);
    HttpResponse::Created()
        .insert_header((header::LOCATION, body.links.self_link.href.clone()))
        .json(body)
}

/// List drives one page at a time, oldest first.
#[utoipa::path(
    get,
    path = "/v1/drive",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page index"),
        ("size" = Option<u32>, Query, description = "Page size between 1 and 100")
    ),
    responses(
        (status = 200, description = "One page of drives", body = DrivePageSchema),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema)
    ),
    tags = ["drives"],
    operation_id = "listDrives"
)]
#[get("")]
pub async fn list_drives(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
) -> ApiResult<web::Json<Page<DriveResponse>>> {
    let request = parse_page(params.into_inner())?;
    let page = state.drives_query.list(request).await?;
    Ok(web::Json(page.map(DriveResponse::from)))
}

/// Fetch a drive by its business code.
#[utoipa::path(
    get,
    path = "/v1/drive/{code}",
    params(("code" = String, Path, description = "Drive code")),
    responses(
        (status = 200, description = "The drive", body = DriveResponse),
        (status = 404, description = "No drive has this code", body = ErrorSchema)
    ),
    tags = ["drives"],
    operation_id = "getDriveByCode"
)]
#[get("/{code}")]
pub async fn get_drive(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DriveResponse>> {
    let code = parse_code(path.into_inner())?;
    let drive = state.drives_query.get_by_code(&code).await?;
    Ok(web::Json(drive.into()))
}

/// List the disks of a drive.
#[utoipa::path(
    get,
    path = "/v1/drive/{code}/disks",
    params(("code" = String, Path, description = "Drive code")),
    responses(
        (status = 200, description = "Disks in insertion order", body = [DiskResponse]),
        (status = 404, description = "No drive has this code", body = ErrorSchema)
    ),
    tags = ["drives"],
    operation_id = "listDriveDisks"
)]
#[get("/{code}/disks")]
pub async fn list_disks(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<DiskResponse>>> {
    let code = parse_code(path.into_inner())?;
    let disks = state.drives_query.disks(&code).await?;
    Ok(web::Json(disks.into_iter().map(DiskResponse::from).collect()))
}

/// Create a drive without disks.
#[utoipa::path(
    post,
    path = "/v1/drive",
    request_body = ResourceRequest,
    responses(
        (status = 201, description = "Drive created", body = DriveResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Code already exists", body = ErrorSchema)
    ),
    tags = ["drives"],
    operation_id = "createDrive"
)]
#[post("")]
pub async fn create_drive(
    state: web::Data<HttpState>,
    payload: web::Json<ResourceRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ResourceDraft::try_from(payload.into_inner())?;
    Ok(created(state.drives.create(draft).await?))
}

/// Create a drive and one disk inside it in a single step.
#[utoipa::path(
    post,
    path = "/v1/drive/with-disk",
    request_body = DriveWithDiskRequest,
    responses(
        (status = 201, description = "Drive and disk created", body = DriveResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Code or disk uuid already exists", body = ErrorSchema)
    ),
    tags = ["drives"],
    operation_id = "createDriveWithDisk"
)]
#[post("/with-disk")]
pub async fn create_drive_with_disk(
    state: web::Data<HttpState>,
    payload: web::Json<DriveWithDiskRequest>,
) -> ApiResult<HttpResponse> {
    let (draft, disk) = payload.into_inner().into_drafts()?;
    Ok(created(state.drives.create_with_disk(draft, disk).await?))
}

/// Overwrite the supplied fields of a drive.
///
/// An unknown uuid answers 404 before the body is validated.
#[utoipa::path(
    patch,
    path = "/v1/drive/{uuid}",
    params(("uuid" = String, Path, description = "Drive uuid")),
    request_body = ResourceRequest,
    responses(
        (status = 200, description = "Updated drive", body = DriveResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No drive has this uuid", body = ErrorSchema),
        (status = 409, description = "New code already exists", body = ErrorSchema)
    ),
    tags = ["drives"],
    operation_id = "patchDrive"
)]
#[patch("/{uuid}")]
pub async fn patch_drive(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<serde_json::Value>,
) -> ApiResult<web::Json<DriveResponse>> {
    let uuid = parse_uuid(path.into_inner())?;
    state.drives_query.get_by_uuid(&uuid).await?;
    let patch = parse_patch(payload.into_inner())?;
    Ok(web::Json(state.drives.patch(&uuid, patch).await?.into()))
}

/// Delete a drive together with its disks.
#[utoipa::path(
    delete,
    path = "/v1/drive/{uuid}",
    params(("uuid" = String, Path, description = "Drive uuid")),
    responses(
        (status = 204, description = "Drive deleted"),
        (status = 404, description = "No drive has this uuid", body = ErrorSchema)
    ),
    tags = ["drives"],
    operation_id = "deleteDrive"
)]
#[delete("/{uuid}")]
pub async fn delete_drive(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let uuid = parse_uuid(path.into_inner())?;
    state.drives.delete(&uuid).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the drive handlers on a `/drive` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(crate::inbound::http::paths::DRIVE)
            .service(list_drives)
            .service(create_drive)
            .service(create_drive_with_disk)
            .service(list_disks)
            .service(get_drive)
            .service(patch_drive)
            .service(delete_drive),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        MockDriveCommand, MockDriveQuery, MockUserCommand, MockUserQuery,
    };
    use crate::domain::{Disk, Error, ResourceCode, ResourceName, ResourceUuid};

    fn drive() -> Drive {
        Drive::new(
            ResourceUuid::new("drive-1").expect("uuid"),
            ResourceCode::new("D1").expect("code"),
            ResourceName::new("Main").expect("name"),
        )
    }

    async fn send(
        drives: MockDriveCommand,
        drives_query: MockDriveQuery,
        request: actix_test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let state = HttpState {
            users: Arc::new(MockUserCommand::new()),
            users_query: Arc::new(MockUserQuery::new()),
            drives: Arc::new(drives),
            drives_query: Arc::new(drives_query),
        };
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::inbound::http::routes),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    #[rstest]
    #[actix_web::test]
    async fn with_disk_route_is_not_mistaken_for_a_code() {
        let mut drives = MockDriveCommand::new();
        drives.expect_create().times(0);
        drives
            .expect_create_with_disk()
            .withf(|draft, disk| {
                draft.code.as_ref() == "D1"
                    && disk.uuid == Some(ResourceUuid::new("k1").expect("uuid"))
            })
            .times(1)
            .return_once(|_, _| Ok(drive()));

        let res = send(
            drives,
            MockDriveQuery::new(),
            actix_test::TestRequest::post()
                .uri("/v1/drive/with-disk")
                .set_json(json!({ "code": "D1", "name": "Main", "disk": { "uuid": "k1" } })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["_links"]["disks"]["href"], "/v1/drive/D1/disks");
    }

    #[rstest]
    #[actix_web::test]
    async fn disks_are_listed_for_a_drive() {
        let mut query = MockDriveQuery::new();
        query.expect_disks().times(1).return_once(|_| {
            Ok(vec![Disk::new(
                ResourceUuid::new("k1").expect("uuid"),
                ResourceUuid::new("drive-1").expect("uuid"),
            )])
        });

        let res = send(
            MockDriveCommand::new(),
            query,
            actix_test::TestRequest::get().uri("/v1/drive/D1/disks"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!([{ "uuid": "k1", "driveUuid": "drive-1" }]));
    }

    #[rstest]
    #[actix_web::test]
    async fn conflicting_create_answers_409() {
        let mut drives = MockDriveCommand::new();
        drives
            .expect_create()
            .return_once(|_| Err(Error::conflict("code 'D1' already exists")));

        let res = send(
            drives,
            MockDriveQuery::new(),
            actix_test::TestRequest::post()
                .uri("/v1/drive")
                .set_json(json!({ "code": "D1", "name": "Main" })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[rstest]
    #[actix_web::test]
    async fn uuid_change_is_rejected_as_bad_request() {
        let mut drives = MockDriveCommand::new();
        drives
            .expect_patch()
            .return_once(|_, _| Err(Error::invalid_request("uuid is immutable")));
        let mut query = MockDriveQuery::new();
        query
            .expect_get_by_uuid()
            .times(1)
            .return_once(|_| Ok(drive()));

        let res = send(
            drives,
            query,
            actix_test::TestRequest::patch()
                .uri("/v1/drive/drive-1")
                .set_json(json!({ "uuid": "drive-2" })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "uuid is immutable");
    }

    #[rstest]
    #[actix_web::test]
    async fn patch_of_unknown_uuid_is_not_found_before_the_body_is_checked() {
        let mut drives = MockDriveCommand::new();
        drives.expect_patch().times(0);
        let mut query = MockDriveQuery::new();
        query
            .expect_get_by_uuid()
            .times(1)
            .return_once(|_| Err(Error::not_found("drive with uuid 'missing' not found")));

        let res = send(
            drives,
            query,
            actix_test::TestRequest::patch()
                .uri("/v1/drive/missing")
                .set_json(json!({ "name": "" })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
