//! Classification of Diesel failures shared by the repositories.
//!
//! Each repository owns its error enum, so this module only sorts a Diesel
//! error into a [`DieselFailure`]; the repositories then pick their own
//! variant. Unique violations keep the constraint name so adapters can tell
//! a taken code from a taken uuid.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Coarse category of a failed Diesel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// A unique constraint rejected the write.
    UniqueViolation { constraint: Option<String> },
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// Any other query failure.
    Query(&'static str),
}

impl DieselFailure {
    /// Whether the failure came from the named unique constraint.
    pub(crate) fn violates(&self, name: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint: Some(c) } if c == name)
    }
}

pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        _ => DieselFailure::Query("database error"),
    }
}

/// Convert a store count into the unsigned form pages use.
pub(crate) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

/// Convert a page offset or size into the signed form SQL expects.
pub(crate) fn to_sql_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
