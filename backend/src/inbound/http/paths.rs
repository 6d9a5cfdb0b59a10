//! Path segments shared by the router, the `Location` headers and the
//! hypermedia links.

/// Version prefix for every resource endpoint.
pub const V1: &str = "/v1";
/// User resource collection.
pub const USER: &str = "/user";
/// Drive resource collection.
pub const DRIVE: &str = "/drive";
/// Reserved for profile endpoints; nothing is routed under it yet.
pub const PROFILE: &str = "/profile";

/// Collection path for users, e.g. `/v1/user`.
pub fn user_collection() -> String {
    format!("{V1}{USER}")
}

/// Collection path for drives, e.g. `/v1/drive`.
pub fn drive_collection() -> String {
    format!("{V1}{DRIVE}")
}
