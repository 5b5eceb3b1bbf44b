//! Pagination types and traits
//!
//! Defines the page-length mode, page descriptors and the query collaborator
//! used to seed a list from an already limited query.

use crate::source::{ItemIter, ItemSource};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Page size of a paginated view
///
/// A length of zero is not a page size but a separate mode: paging is off and
/// the whole collection counts as one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub enum PageLength {
    /// Paging disabled
    Disabled,
    /// Pages of the given size
    Enabled(NonZeroUsize),
}

impl PageLength {
    /// Length used when nothing else is configured
    pub const DEFAULT: usize = 10;

    /// Create from a raw length (0 disables paging)
    pub fn new(length: usize) -> Self {
        NonZeroUsize::new(length).map_or(Self::Disabled, Self::Enabled)
    }

    /// Raw length, 0 when disabled
    pub fn get(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Enabled(size) => size.get(),
        }
    }

    /// Check if paging is disabled
    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl Default for PageLength {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<usize> for PageLength {
    fn from(length: usize) -> Self {
        Self::new(length)
    }
}

impl From<PageLength> for usize {
    fn from(length: PageLength) -> Self {
        length.get()
    }
}

/// One entry of a page list or pagination summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// One-based page number, `None` for an ellipsis marker
    pub page_num: Option<usize>,
    /// Whether this is the current page
    pub current: bool,
    /// Link to the page, `None` for an ellipsis marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl PageDescriptor {
    /// Create a numbered page entry
    pub fn page(page_num: usize, current: bool, link: impl Into<String>) -> Self {
        Self {
            page_num: Some(page_num),
            current,
            link: Some(link.into()),
        }
    }

    /// Create an ellipsis marker
    pub fn ellipsis() -> Self {
        Self {
            page_num: None,
            current: false,
            link: None,
        }
    }

    /// Check if this entry stands in for an elided range
    pub fn is_ellipsis(&self) -> bool {
        self.page_num.is_none()
    }
}

/// Limit clause of an executed query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLimit {
    /// Maximum number of rows returned (0 = unlimited)
    pub limit: usize,
    /// Offset of the first returned row
    pub start: usize,
}

/// A query that was executed with a limit and knows its unlimited size
pub trait LimitedQuery {
    /// Limit and offset the query ran with
    fn limit(&self) -> QueryLimit;

    /// Number of rows the query would return without its limit
    fn unlimited_row_count(&self) -> usize;
}

/// One fetched page of rows plus the totals of the unlimited query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPage<T> {
    /// Rows returned for the page
    pub rows: Vec<T>,
    /// Limit and offset used
    pub limit: QueryLimit,
    /// Row count ignoring the limit
    pub total_rows: usize,
}

impl<T> QueryPage<T> {
    /// Create a page
    pub fn new(rows: Vec<T>, limit: QueryLimit, total_rows: usize) -> Self {
        Self {
            rows,
            limit,
            total_rows,
        }
    }
}

impl<T> LimitedQuery for QueryPage<T> {
    fn limit(&self) -> QueryLimit {
        self.limit
    }

    fn unlimited_row_count(&self) -> usize {
        self.total_rows
    }
}

impl<T> ItemSource for QueryPage<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.rows.len()
    }

    fn iter_range(&self, start: usize, len: usize) -> ItemIter<'_, T> {
        self.rows.iter_range(start, len)
    }

    fn iter_all(&self) -> ItemIter<'_, T> {
        Box::new(self.rows.iter())
    }
}

/// Snapshot of everything a navigation control needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    /// Zero-based offset of the current page
    pub page_start: usize,
    /// Items per page (0 when paging is disabled)
    pub page_length: usize,
    /// Number of items in the whole collection
    pub total_items: usize,
    /// One-based current page
    pub current_page: usize,
    /// Number of pages
    pub total_pages: usize,
    /// One-based index of the first item shown
    pub first_item: usize,
    /// One-based index of the last item shown
    pub last_item: usize,
    /// Whether the items span more than one page
    pub more_than_one_page: bool,
    /// Whether the current page is the first
    pub first_page: bool,
    /// Whether the current page is the last
    pub last_page: bool,
    /// Page list, possibly windowed
    pub pages: Vec<PageDescriptor>,
    /// Elided summary with ellipsis entries
    pub summary: Vec<PageDescriptor>,
    /// Link to the first page
    pub first_link: String,
    /// Link to the last page
    pub last_link: String,
    /// Link to the previous page, if any
    pub prev_link: Option<String>,
    /// Link to the next page, if any
    pub next_link: Option<String>,
}
