//! In-process repositories used when no database is configured.
//!
//! They honour the same contracts as the Diesel adapters (insertion order,
//! unique codes and uuids, cascading disk removal) so the HTTP surface
//! behaves identically in local runs and integration tests.

mod drive_repository;
mod user_repository;

pub use drive_repository::InMemoryDriveRepository;
pub use user_repository::InMemoryUserRepository;

use pagination::{Page, PageRequest};

/// Slice `items` into the page described by `request`.
fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let content = items
        .iter()
        .skip(offset)
        .take(request.size() as usize)
        .cloned()
        .collect();
    Page::new(content, request, items.len() as u64)
}
