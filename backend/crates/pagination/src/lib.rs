//! Page request and page envelope primitives shared by listing endpoints.
//!
//! Listing endpoints accept a zero-based page index and a page size, and
//! answer with a [`Page`] envelope carrying the page content together with
//! total-count metadata. Ordering is left to the storage adapter.
//!
//! # Examples
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(1, 2).expect("valid page request");
//! let page = Page::new(vec!["c", "d"], request, 5);
//! assert_eq!(page.total_pages(), 3);
//! assert_eq!(request.offset(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validation failures raised when building a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The requested page size was zero.
    #[error("page size must be at least 1")]
    ZeroSize,
    /// The requested page size exceeded [`MAX_PAGE_SIZE`].
    #[error("page size must be at most {0}")]
    SizeTooLarge(u32),
}

impl PageRequestError {
    /// Query parameter the error refers to.
    ///
    /// Every page index a `u32` can hold is valid, so only `size` can fail.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ZeroSize | Self::SizeTooLarge(_) => "size",
        }
    }
}

/// Validated request for one page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Build a request for the zero-based `page` holding `size` items.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when `size` is zero or larger than
    /// [`MAX_PAGE_SIZE`].
    pub const fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::ZeroSize);
        }
        if size > MAX_PAGE_SIZE {
            return Err(PageRequestError::SizeTooLarge(MAX_PAGE_SIZE));
        }
        Ok(Self { page, size })
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of items preceding this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Raw paging parameters as they arrive on a query string.
///
/// Absent values fall back to page `0` and [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageParams {
    /// Zero-based page index.
    pub page: Option<u32>,
    /// Requested page size.
    pub size: Option<u32>,
}

impl TryFrom<PageParams> for PageRequest {
    type Error = PageRequestError;

    fn try_from(value: PageParams) -> Result<Self, Self::Error> {
        Self::new(
            value.page.unwrap_or(0),
            value.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// One page of a listing plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Wrap `content` as the page described by `request` out of
    /// `total_elements` items overall.
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(request.size as u64),
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of items across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages needed to hold every item.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Convert every item while keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page requests and envelopes.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(PageParams { page: None, size: Some(0) })]
    #[case(PageParams { page: Some(u32::MAX), size: Some(MAX_PAGE_SIZE + 1) })]
    fn size_errors_name_the_size_parameter(#[case] params: PageParams) {
        let err = PageRequest::try_from(params).expect_err("invalid size");
        assert_eq!(err.field(), "size");
    }

    #[rstest]
    #[case(0, 1)]
    #[case(3, 20)]
    #[case(7, MAX_PAGE_SIZE)]
    fn page_request_accepts_sizes_in_range(#[case] page: u32, #[case] size: u32) {
        let request = PageRequest::new(page, size).expect("size within range");
        assert_eq!(request.page(), page);
        assert_eq!(request.size(), size);
    }

    #[rstest]
    #[case(0, PageRequestError::ZeroSize)]
    #[case(MAX_PAGE_SIZE + 1, PageRequestError::SizeTooLarge(MAX_PAGE_SIZE))]
    fn page_request_rejects_sizes_out_of_range(
        #[case] size: u32,
        #[case] expected: PageRequestError,
    ) {
        assert_eq!(PageRequest::new(0, size), Err(expected));
    }

    #[rstest]
    fn params_fall_back_to_defaults() {
        let request = PageRequest::try_from(PageParams::default()).expect("defaults are valid");
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
    }

    #[rstest]
    fn offset_does_not_overflow_for_large_pages() {
        let request = PageRequest::new(u32::MAX, MAX_PAGE_SIZE).expect("valid request");
        assert_eq!(request.offset(), u64::from(u32::MAX) * u64::from(MAX_PAGE_SIZE));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(20, 1)]
    #[case(21, 2)]
    fn total_pages_rounds_up(#[case] total: u64, #[case] expected: u64) {
        let page: Page<u8> = Page::new(Vec::new(), PageRequest::default(), total);
        assert_eq!(page.total_pages(), expected);
    }

    #[rstest]
    fn page_serialises_with_camel_case_metadata() {
        let request = PageRequest::new(0, 2).expect("valid request");
        let page = Page::new(vec![1, 2], request, 3).map(|n| n * 10);

        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(
            value,
            json!({
                "content": [10, 20],
                "page": 0,
                "size": 2,
                "totalElements": 3,
                "totalPages": 2,
            })
        );
    }
}
