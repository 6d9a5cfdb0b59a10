//! Library backend: a REST service managing drives and users.
//!
//! The crate follows a ports-and-adapters layout. [`domain`] holds the
//! resource aggregates, the driving and driven ports and the services that
//! implement them. [`inbound::http`] exposes the `/v1` endpoints and
//! [`outbound`] provides PostgreSQL and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
