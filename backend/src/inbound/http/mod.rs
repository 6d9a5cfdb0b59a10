//! HTTP inbound adapter exposing the `/v1` REST endpoints.

pub mod drives;
pub mod error;
pub mod health;
pub mod paths;
pub mod representation;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

use validation::malformed_request_error;

/// Register extractor error handlers and every `/v1` resource scope.
///
/// Bodies, paths and query strings that fail to decode answer `400` with
/// the same JSON error envelope the handlers use.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| malformed_request_error("body", &err).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| malformed_request_error("path", &err).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| malformed_request_error("query", &err).into()),
    )
    .service(
        web::scope(paths::V1)
            .configure(users::configure)
            .configure(drives::configure),
    );
}
