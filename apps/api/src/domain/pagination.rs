use serde::Serialize;

use super::team::SortOrder;

/// A request for one page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Maximum number of elements per page, at least one
    pub size: u32,
    /// Ordering applied before paging; empty means the store's natural order
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32, sort: Vec<SortOrder>) -> Self {
        Self { page, size, sort }
    }

    /// Number of elements skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results plus pagination metadata
///
/// Serialises as
/// `{content, totalElements, totalPages, number, size, numberOfElements, first, last, empty}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            u32::try_from(total_elements.div_ceil(u64::from(request.size))).unwrap_or(u32::MAX)
        };

        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
        }
    }

    /// Maps every element, keeping the pagination metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
