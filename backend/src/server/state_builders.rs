//! Builds [`HttpState`] from whichever store the configuration selects.

use std::sync::Arc;

use actix_web::web;

use library_api::domain::{DriveService, UserService};
use library_api::inbound::http::state::HttpState;
use library_api::outbound::memory::{InMemoryDriveRepository, InMemoryUserRepository};
use library_api::outbound::persistence::{DieselDriveRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire the user and drive services over Diesel when a pool is configured,
/// otherwise over process-local memory.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState::from_services(
            Arc::new(UserService::new(Arc::new(DieselUserRepository::new(
                pool.clone(),
            )))),
            Arc::new(DriveService::new(Arc::new(DieselDriveRepository::new(
                pool.clone(),
            )))),
        ),
        None => HttpState::from_services(
            Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
            Arc::new(DriveService::new(Arc::new(InMemoryDriveRepository::new()))),
        ),
    };
    web::Data::new(state)
}
