//! User resource handlers.
//!
//! ```text
//! GET    /v1/user?page=0&size=20
//! GET    /v1/user/{code}
//! POST   /v1/user            {"code":"1234","name":"henk"}
//! PATCH  /v1/user/{uuid}     {"name":"piet"}
//! DELETE /v1/user/{uuid}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use pagination::{Page, PageParams};

use crate::domain::ResourceDraft;
use crate::inbound::http::ApiResult;
use crate::inbound::http::representation::UserResponse;
use crate::inbound::http::schemas::{ErrorSchema, UserPageSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    ResourceRequest, parse_code, parse_page, parse_patch, parse_uuid,
};

/// List users one page at a time, oldest first.
#[utoipa::path(
    get,
    path = "/v1/user",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page index"),
        ("size" = Option<u32>, Query, description = "Page size between 1 and 100")
    ),
    responses(
        (status = 200, description = "One page of users", body = UserPageSchema),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("")]
pub async fn list_users(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
) -> ApiResult<web::Json<Page<UserResponse>>> {
    let request = parse_page(params.into_inner())?;
    let page = state.users_query.list(request).await?;
    Ok(web::Json(page.map(UserResponse::from)))
}

/// Fetch a user by its business code.
#[utoipa::path(
    get,
    path = "/v1/user/{code}",
    params(("code" = String, Path, description = "User code")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 400, description = "Malformed code", body = ErrorSchema),
        (status = 404, description = "No user has this code", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserByCode"
)]
#[get("/{code}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let code = parse_code(path.into_inner())?;
    let user = state.users_query.get_by_code(&code).await?;
    Ok(web::Json(user.into()))
}

/// Create a user; the code must not be taken yet.
#[utoipa::path(
    post,
    path = "/v1/user",
    request_body = ResourceRequest,
    responses(
        (
            status = 201,
            description = "User created",
            body = UserResponse,
            headers(("Location" = String, description = "Lookup path of the new user"))
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Code already exists", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<ResourceRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ResourceDraft::try_from(payload.into_inner())?;
    let body = UserResponse::from(state.users.create(draft).await?);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, body.links.self_link.href.clone()))
        .json(body))
}

/// Overwrite the supplied fields of a user.
///
/// An unknown uuid answers 404 before the body is validated. A `uuid` field
/// equal to the path uuid is ignored; any other value is rejected because
/// identifiers are immutable.
#[utoipa::path(
    patch,
    path = "/v1/user/{uuid}",
    params(("uuid" = String, Path, description = "User uuid")),
    request_body = ResourceRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No user has this uuid", body = ErrorSchema),
        (status = 409, description = "New code already exists", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "patchUser"
)]
#[patch("/{uuid}")]
pub async fn patch_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<serde_json::Value>,
) -> ApiResult<web::Json<UserResponse>> {
    let uuid = parse_uuid(path.into_inner())?;
    state.users_query.get_by_uuid(&uuid).await?;
    let patch = parse_patch(payload.into_inner())?;
    let user = state.users.patch(&uuid, patch).await?;
    Ok(web::Json(user.into()))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/v1/user/{uuid}",
    params(("uuid" = String, Path, description = "User uuid")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user has this uuid", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/{uuid}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let uuid = parse_uuid(path.into_inner())?;
    state.users.delete(&uuid).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the user handlers on a `/user` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(crate::inbound::http::paths::USER)
            .service(list_users)
            .service(create_user)
            .service(get_user)
            .service(patch_user)
            .service(delete_user),
    );
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
