//! Shared HTTP adapter state.
//!
//! Handlers take this through `web::Data` and only see driving ports, so
//! they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{DriveCommand, DriveQuery, UserCommand, UserQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
    pub drives: Arc<dyn DriveCommand>,
    pub drives_query: Arc<dyn DriveQuery>,
}

impl HttpState {
    /// Wire services that implement both the query and the command port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use library_api::domain::{DriveService, UserService};
    /// use library_api::inbound::http::state::HttpState;
    /// use library_api::outbound::memory::{InMemoryDriveRepository, InMemoryUserRepository};
    ///
    /// let state = HttpState::from_services(
    ///     Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
    ///     Arc::new(DriveService::new(Arc::new(InMemoryDriveRepository::new()))),
    /// );
    /// # let _ = state;
    /// ```
    pub fn from_services<U, D>(users: Arc<U>, drives: Arc<D>) -> Self
    where
        U: UserCommand + UserQuery + 'static,
        D: DriveCommand + DriveQuery + 'static,
    {
        Self {
            users: users.clone(),
            users_query: users,
            drives: drives.clone(),
            drives_query: drives,
        }
    }
}
