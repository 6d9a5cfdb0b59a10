//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{ResourceCode, ResourceName, ResourceUuid, ResourceValidationError, User};

use super::diesel_error_mapping::{
    DieselFailure, classify_diesel_error, count_to_u64, to_sql_i64,
};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::{constraints, users};

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

/// Map a Diesel error, resolving unique violations against `user`.
fn map_write_error(error: diesel::result::Error, user: &User) -> UserPersistenceError {
    match classify_diesel_error(error) {
        failure if failure.violates(constraints::USERS_CODE) => {
            UserPersistenceError::duplicate_code(user.code().as_ref())
        }
        failure if failure.violates(constraints::USERS_UUID) => {
            UserPersistenceError::duplicate_uuid(user.uuid().as_ref())
        }
        failure => map_failure(failure),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_failure(classify_diesel_error(error))
}

fn map_failure(failure: DieselFailure) -> UserPersistenceError {
    match failure {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::Query(message) => UserPersistenceError::query(message),
        DieselFailure::UniqueViolation { constraint } => UserPersistenceError::query(format!(
            "unexpected unique violation on {}",
            constraint.as_deref().unwrap_or("unknown constraint")
        )),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let invalid = |err: ResourceValidationError| {
        UserPersistenceError::query(format!("invalid stored user: {err}"))
    };
    Ok(User::new(
        ResourceUuid::new(row.uuid).map_err(invalid)?,
        ResourceCode::new(row.code).map_err(invalid)?,
        ResourceName::new(row.name).map_err(invalid)?,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            uuid: user.uuid().as_ref(),
            code: user.code().as_ref(),
            name: user.name().as_ref(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, user))
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = UserUpdate {
            code: user.code().as_ref(),
            name: user.name().as_ref(),
        };

        let updated = diesel::update(users::table.filter(users::uuid.eq(user.uuid().as_ref())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_write_error(err, user))?;
        Ok(updated > 0)
    }

    async fn find_by_uuid(
        &self,
        uuid: &ResourceUuid,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .filter(users::uuid.eq(uuid.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn find_by_code(
        &self,
        code: &ResourceCode,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .filter(users::code.eq(code.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn exists_by_code(&self, code: &ResourceCode) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            users::table.filter(users::code.eq(code.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn list(&self, request: PageRequest) -> Result<Page<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .limit(i64::from(request.size()))
            .offset(to_sql_i64(request.offset()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let content = rows
            .into_iter()
            .map(row_to_user)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(content, request, count_to_u64(total)))
    }

    async fn delete_by_uuid(&self, uuid: &ResourceUuid) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(users::table.filter(users::uuid.eq(uuid.as_ref())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn stored_rows_convert_to_users() {
        let user = row_to_user(UserRow {
            uuid: "test-uuid".to_owned(),
            code: "1234".to_owned(),
            name: "henk".to_owned(),
        })
        .expect("valid row");
        assert_eq!(user.code().as_ref(), "1234");
    }

    #[rstest]
    fn corrupt_rows_surface_as_query_errors() {
        let err = row_to_user(UserRow {
            uuid: String::new(),
            code: "1234".to_owned(),
            name: "henk".to_owned(),
        })
        .expect_err("empty uuid");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }
}
