//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their serialised shape so the generated document
//! matches what handlers actually return.

use utoipa::ToSchema;

use crate::inbound::http::representation::{DriveResponse, UserResponse};

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request collides with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// The backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending field.
    details: Option<serde_json::Value>,
}

/// One page of users.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPageSchema {
    content: Vec<UserResponse>,
    page: u32,
    size: u32,
    total_elements: u64,
    total_pages: u64,
}

/// One page of drives.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DrivePageSchema {
    content: Vec<DriveResponse>,
    page: u32,
    size: u32,
    total_elements: u64,
    total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_is_registered_under_the_domain_name() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"), "trace id is camelCase");
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "conflict",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn page_schemas_carry_total_counts() {
        for schema_json in [
            schema_to_json::<UserPageSchema>(),
            schema_to_json::<DrivePageSchema>(),
        ] {
            assert!(schema_json.contains("totalElements"));
            assert!(schema_json.contains("totalPages"));
        }
    }
}
