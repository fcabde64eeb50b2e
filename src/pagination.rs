//! Paged queries and their results.
//!
//! Page indexes are zero-based. Sizes are clamped to `1..=MAX_PAGE_SIZE` when a
//! [`PageRequest`] is built so every store sees sane bounds. A page whose
//! offset does not fit an SQL `OFFSET` is past the end and always empty.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const MAX_PAGE_SIZE: usize = 100;

/// Column a page is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    #[default]
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

/// Which slice of a result set to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
    sort: Sort,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: Sort::default(),
        }
    }

    pub fn sorted(mut self, field: SortField, direction: Direction) -> Self {
        self.sort = Sort { field, direction };
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Always within `1..=MAX_PAGE_SIZE`.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Number of rows to skip before this page starts.
    ///
    /// `None` when the offset overflows `i64`; no store can hold that many
    /// rows, so such a page is empty.
    pub fn offset(&self) -> Option<i64> {
        self.page
            .checked_mul(self.size)
            .and_then(|offset| i64::try_from(offset).ok())
    }

    /// Row limit for this page.
    pub fn limit(&self) -> i64 {
        self.size as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// A bounded slice of results plus the metadata needed to navigate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    /// Total number of matching rows across all pages.
    pub total: usize,
    pub pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total: usize) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
            pages: total.div_ceil(request.size()),
        }
    }

    /// Convert every item, keeping the page metadata untouched.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            pages: self.pages,
        }
    }
}
