//! PostgreSQL-backed `DriveRepository` implementation using Diesel ORM.
//!
//! Drives and disks live in separate tables joined by the surrogate
//! `drives.id`. The adapter resolves that key itself, so the domain only
//! ever sees uuids.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{DriveRepository, DriveRepositoryError};
use crate::domain::{
    Disk, Drive, ResourceCode, ResourceName, ResourceUuid, ResourceValidationError,
};

use super::diesel_error_mapping::{
    DieselFailure, classify_diesel_error, count_to_u64, to_sql_i64,
};
use super::models::{DiskRow, DriveRow, DriveUpdate, NewDiskRow, NewDriveRow};
use super::pool::{DbPool, PoolError};
use super::schema::{constraints, disks, drives};

/// Diesel-backed implementation of the [`DriveRepository`] port.
#[derive(Clone)]
pub struct DieselDriveRepository {
    pool: DbPool,
}

impl DieselDriveRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DriveRepositoryError {
    DriveRepositoryError::connection(error.into_message())
}

fn map_failure(failure: DieselFailure) -> DriveRepositoryError {
    match failure {
        DieselFailure::Connection(message) => DriveRepositoryError::connection(message),
        DieselFailure::Query(message) => DriveRepositoryError::query(message),
        DieselFailure::UniqueViolation { constraint } => DriveRepositoryError::query(format!(
            "unexpected unique violation on {}",
            constraint.as_deref().unwrap_or("unknown constraint")
        )),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> DriveRepositoryError {
    map_failure(classify_diesel_error(error))
}

/// Map a write failure, naming the drive or disk value that collided.
fn map_write_error(
    error: diesel::result::Error,
    drive: &Drive,
    disk: Option<&Disk>,
) -> DriveRepositoryError {
    let failure = classify_diesel_error(error);
    if failure.violates(constraints::DRIVES_CODE) {
        return DriveRepositoryError::duplicate_code(drive.code().as_ref());
    }
    if failure.violates(constraints::DRIVES_UUID) {
        return DriveRepositoryError::duplicate_uuid(drive.uuid().as_ref());
    }
    match disk {
        Some(disk) if failure.violates(constraints::DISKS_UUID) => {
            DriveRepositoryError::duplicate_disk_uuid(disk.uuid().as_ref())
        }
        _ => map_failure(failure),
    }
}

fn invalid_row(err: ResourceValidationError) -> DriveRepositoryError {
    DriveRepositoryError::query(format!("invalid stored drive: {err}"))
}

fn row_to_drive(row: DriveRow) -> Result<Drive, DriveRepositoryError> {
    Ok(Drive::new(
        ResourceUuid::new(row.uuid).map_err(invalid_row)?,
        ResourceCode::new(row.code).map_err(invalid_row)?,
        ResourceName::new(row.name).map_err(invalid_row)?,
    ))
}

fn new_drive_row(drive: &Drive) -> NewDriveRow<'_> {
    NewDriveRow {
        uuid: drive.uuid().as_ref(),
        code: drive.code().as_ref(),
        name: drive.name().as_ref(),
    }
}

#[async_trait]
impl DriveRepository for DieselDriveRepository {
    async fn insert(&self, drive: &Drive) -> Result<(), DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(drives::table)
            .values(&new_drive_row(drive))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, drive, None))
    }

    async fn insert_with_disk(
        &self,
        drive: &Drive,
        disk: &Disk,
    ) -> Result<(), DriveRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let drive_row = new_drive_row(drive);
        let disk_uuid = disk.uuid().as_ref();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let drive_id: i64 = diesel::insert_into(drives::table)
                    .values(&drive_row)
                    .returning(drives::id)
                    .get_result(conn)
                    .await?;
                diesel::insert_into(disks::table)
                    .values(&NewDiskRow {
                        uuid: disk_uuid,
                        drive_id,
                    })
                    .execute(conn)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_write_error(err, drive, Some(disk)))
    }

    async fn update(&self, drive: &Drive) -> Result<bool, DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = DriveUpdate {
            code: drive.code().as_ref(),
            name: drive.name().as_ref(),
        };

        let updated =
            diesel::update(drives::table.filter(drives::uuid.eq(drive.uuid().as_ref())))
                .set(&changes)
                .execute(&mut conn)
                .await
                .map_err(|err| map_write_error(err, drive, None))?;
        Ok(updated > 0)
    }

    async fn find_by_uuid(
        &self,
        uuid: &ResourceUuid,
    ) -> Result<Option<Drive>, DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        drives::table
            .filter(drives::uuid.eq(uuid.as_ref()))
            .select(DriveRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_drive)
            .transpose()
    }

    async fn find_by_code(
        &self,
        code: &ResourceCode,
    ) -> Result<Option<Drive>, DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        drives::table
            .filter(drives::code.eq(code.as_ref()))
            .select(DriveRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_drive)
            .transpose()
    }

    async fn exists_by_code(&self, code: &ResourceCode) -> Result<bool, DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            drives::table.filter(drives::code.eq(code.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Drive>, DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = drives::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let rows: Vec<DriveRow> = drives::table
            .order(drives::id.asc())
            .limit(i64::from(request.size()))
            .offset(to_sql_i64(request.offset()))
            .select(DriveRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let content = rows
            .into_iter()
            .map(row_to_drive)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(content, request, count_to_u64(total)))
    }

    async fn disks_for_drive(
        &self,
        drive_uuid: &ResourceUuid,
    ) -> Result<Vec<Disk>, DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DiskRow> = disks::table
            .inner_join(drives::table)
            .filter(drives::uuid.eq(drive_uuid.as_ref()))
            .order(disks::id.asc())
            .select(DiskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| {
                ResourceUuid::new(row.uuid)
                    .map(|uuid| Disk::new(uuid, drive_uuid.clone()))
                    .map_err(invalid_row)
            })
            .collect()
    }

    async fn delete_by_uuid(&self, uuid: &ResourceUuid) -> Result<bool, DriveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(drives::table.filter(drives::uuid.eq(uuid.as_ref())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn drive() -> Drive {
        row_to_drive(DriveRow {
            uuid: "drive-1".to_owned(),
            code: "D1".to_owned(),
            name: "Main".to_owned(),
        })
        .expect("valid row")
    }

    #[rstest]
    fn rows_keep_uuid_code_and_name(drive: Drive) {
        assert_eq!(drive.uuid().as_ref(), "drive-1");
        assert_eq!(drive.code().as_ref(), "D1");
        assert_eq!(drive.name().as_ref(), "Main");
    }

    #[rstest]
    fn row_conversion_rejects_blank_names() {
        let err = row_to_drive(DriveRow {
            uuid: "drive-2".to_owned(),
            code: "D2".to_owned(),
            name: " ".to_owned(),
        })
        .expect_err("blank name");
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[rstest]
    fn not_found_maps_to_query_error(drive: Drive) {
        let err = map_write_error(diesel::result::Error::NotFound, &drive, None);
        assert_eq!(err, DriveRepositoryError::query("record not found"));
    }
}
