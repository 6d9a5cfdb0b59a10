//! Row types mapping the Diesel schema onto Rust structs.
//!
//! Rows stay inside the persistence adapter; repositories convert them to
//! domain aggregates before returning.

use diesel::prelude::*;

use super::schema::{disks, drives, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = drives)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DriveRow {
    pub uuid: String,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = drives)]
pub(crate) struct NewDriveRow<'a> {
    pub uuid: &'a str,
    pub code: &'a str,
    pub name: &'a str,
}

/// Mutable drive columns. The uuid never changes after insert.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = drives)]
pub(crate) struct DriveUpdate<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = disks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DiskRow {
    pub uuid: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = disks)]
pub(crate) struct NewDiskRow<'a> {
    pub uuid: &'a str,
    pub drive_id: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub uuid: String,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub uuid: &'a str,
    pub code: &'a str,
    pub name: &'a str,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub code: &'a str,
    pub name: &'a str,
}
