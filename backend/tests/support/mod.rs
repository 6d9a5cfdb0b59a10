//! Shared wiring for endpoint tests: the full `/v1` router over the
//! in-memory store, wrapped in the trace middleware.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use library_api::Trace;
use library_api::domain::{DriveService, UserService};
use library_api::inbound::http::routes;
use library_api::inbound::http::state::HttpState;
use library_api::outbound::memory::{InMemoryDriveRepository, InMemoryUserRepository};

/// Fresh state over empty in-memory repositories.
pub fn memory_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::from_services(
        Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
        Arc::new(DriveService::new(Arc::new(InMemoryDriveRepository::new()))),
    ))
}

/// The production router around `state`.
pub fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).wrap(Trace).configure(routes)
}
