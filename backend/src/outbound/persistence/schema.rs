//! Diesel table definitions matching the migrations under `migrations/`.
//!
//! Keep in step with the SQL by hand or regenerate with
//! `diesel print-schema`.

diesel::table! {
    /// Storage drives.
    drives (id) {
        /// Surrogate key; never exposed outside the adapter.
        id -> Int8,
        #[max_length = 64]
        uuid -> Varchar,
        #[max_length = 64]
        code -> Varchar,
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    /// Disks mounted in a drive. Rows cascade with their drive.
    disks (id) {
        id -> Int8,
        #[max_length = 64]
        uuid -> Varchar,
        drive_id -> Int8,
    }
}

diesel::table! {
    users (id) {
        id -> Int8,
        #[max_length = 64]
        uuid -> Varchar,
        #[max_length = 64]
        code -> Varchar,
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::joinable!(disks -> drives (drive_id));

diesel::allow_tables_to_appear_in_same_query!(disks, drives, users);

/// Unique constraint names as PostgreSQL derives them from the column
/// definitions.
pub(crate) mod constraints {
    pub(crate) const DRIVES_CODE: &str = "drives_code_key";
    pub(crate) const DRIVES_UUID: &str = "drives_uuid_key";
    pub(crate) const DISKS_UUID: &str = "disks_uuid_key";
    pub(crate) const USERS_CODE: &str = "users_code_key";
    pub(crate) const USERS_UUID: &str = "users_uuid_key";
}
