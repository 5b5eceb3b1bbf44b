//! Paginated list state
//!
//! [`PaginatedList`] wraps an item source and holds the three numbers that
//! define a page: offset, page length and total item count. The current page
//! is always derived from those, never stored.

use super::links::{QueryParams, DEFAULT_PAGINATION_PARAM};
use super::types::{LimitedQuery, PageLength, QueryLimit};
use crate::source::{ItemIter, ItemSource};
use once_cell::unsync::OnceCell;
use tracing::debug;

/// A paginated view over an item source
#[derive(Debug)]
pub struct PaginatedList<S> {
    source: S,
    page_start: Option<usize>,
    page_length: PageLength,
    total_items: OnceCell<usize>,
    limit_items: bool,
    request: QueryParams,
    pagination_param: String,
}

impl<S: ItemSource> PaginatedList<S> {
    /// Create a view over `source` with the default page length
    pub fn new(source: S) -> Self {
        Self::with_request(source, QueryParams::new())
    }

    /// Create a view whose offset is read from the request's parameters
    pub fn with_request(source: S, request: QueryParams) -> Self {
        Self {
            source,
            page_start: None,
            page_length: PageLength::default(),
            total_items: OnceCell::new(),
            limit_items: true,
            request,
            pagination_param: DEFAULT_PAGINATION_PARAM.to_string(),
        }
    }

    /// Create a view over rows that were already limited by a query
    ///
    /// Page length, offset and total come from the query and slicing is
    /// turned off.
    pub fn from_limited_query(query: S, request: QueryParams) -> Self
    where
        S: LimitedQuery,
    {
        let limit = query.limit();
        let total = query.unlimited_row_count();
        let mut list = Self::with_request(query, request);
        list.apply_query_limit(limit, total).set_limit_items(false);
        list
    }

    /// The wrapped item source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwrap the item source
    pub fn into_source(self) -> S {
        self.source
    }

    // ------------------------------------------------------------------------
    // Core fields
    // ------------------------------------------------------------------------

    /// Offset of the first item on the current page
    ///
    /// Until set explicitly this reads the pagination parameter from the
    /// request, falling back to 0.
    pub fn page_start(&self) -> usize {
        self.page_start
            .unwrap_or_else(|| self.request.offset(&self.pagination_param))
    }

    /// Set the offset of the first item on the current page
    pub fn set_page_start(&mut self, start: usize) -> &mut Self {
        self.page_start = Some(start);
        self
    }

    /// Page size, 0 when paging is disabled
    pub fn page_length(&self) -> usize {
        self.page_length.get()
    }

    /// Page size as a mode
    pub fn page_length_mode(&self) -> PageLength {
        self.page_length
    }

    /// Set the page size (0 disables paging)
    pub fn set_page_length(&mut self, length: impl Into<PageLength>) -> &mut Self {
        self.page_length = length.into();
        self
    }

    /// Number of items in the full, unpaged collection
    ///
    /// Measured from the source on first use unless set explicitly.
    pub fn total_items(&self) -> usize {
        *self.total_items.get_or_init(|| {
            let count = self.source.count();
            debug!(count, "Measured item source");
            count
        })
    }

    /// Set the authoritative total, bypassing measurement
    pub fn set_total_items(&mut self, total: usize) -> &mut Self {
        self.total_items = OnceCell::from(total);
        self
    }

    /// Whether iteration is restricted to the current page
    pub fn limit_items(&self) -> bool {
        self.limit_items
    }

    /// Turn slicing off when the source was already limited upstream
    pub fn set_limit_items(&mut self, limit: bool) -> &mut Self {
        self.limit_items = limit;
        self
    }

    /// Query-parameter source used for the offset and for links
    pub fn request(&self) -> &QueryParams {
        &self.request
    }

    /// Replace the query-parameter source
    pub fn set_request(&mut self, request: QueryParams) -> &mut Self {
        self.request = request;
        self
    }

    /// Name of the offset parameter
    pub fn pagination_param(&self) -> &str {
        &self.pagination_param
    }

    /// Rename the offset parameter
    pub fn set_pagination_param(&mut self, name: impl Into<String>) -> &mut Self {
        self.pagination_param = name.into();
        self
    }

    /// Jump to a one-based page
    ///
    /// Does nothing when paging is disabled.
    pub fn set_current_page(&mut self, page: usize) -> &mut Self {
        if let PageLength::Enabled(size) = self.page_length {
            self.page_start = Some(page.saturating_sub(1).saturating_mul(size.get()));
        }
        self
    }

    /// Copy limit, offset and unlimited count from an executed query
    pub fn set_pagination_from_query(&mut self, query: &impl LimitedQuery) -> &mut Self {
        self.apply_query_limit(query.limit(), query.unlimited_row_count())
    }

    fn apply_query_limit(&mut self, limit: QueryLimit, total: usize) -> &mut Self {
        debug!(limit = limit.limit, start = limit.start, total, "Pagination from query");
        self.set_page_length(limit.limit)
            .set_page_start(limit.start)
            .set_total_items(total)
    }

    // ------------------------------------------------------------------------
    // Derived navigation facts
    // ------------------------------------------------------------------------

    /// One-based number of the current page
    pub fn current_page(&self) -> usize {
        match self.page_length {
            PageLength::Disabled => 1,
            PageLength::Enabled(size) => (self.page_start() / size.get()).saturating_add(1),
        }
    }

    /// Number of pages
    pub fn total_pages(&self) -> usize {
        match self.page_length {
            PageLength::Disabled => usize::from(self.total_items() > 0),
            PageLength::Enabled(size) => self.total_items().div_ceil(size.get()),
        }
    }

    /// One-based index of the first item on the page
    pub fn first_item(&self) -> usize {
        match self.page_length {
            PageLength::Disabled => 1,
            PageLength::Enabled(_) => self.page_start().saturating_add(1),
        }
    }

    /// One-based index of the last item on the page
    pub fn last_item(&self) -> usize {
        match self.page_length {
            PageLength::Disabled => self.total_items(),
            PageLength::Enabled(size) => {
                self.page_start()
                    .saturating_add(size.get())
                    .min(self.total_items())
            }
        }
    }

    /// Whether the items span more than one page
    pub fn more_than_one_page(&self) -> bool {
        match self.page_length {
            PageLength::Disabled => false,
            PageLength::Enabled(size) => self.total_items() > size.get(),
        }
    }

    /// Whether the current page is the first
    pub fn first_page(&self) -> bool {
        match self.page_length {
            PageLength::Disabled => true,
            PageLength::Enabled(_) => self.current_page() == 1,
        }
    }

    /// Whether there is a page before the current one
    pub fn not_first_page(&self) -> bool {
        !self.first_page()
    }

    /// Whether the current page is the last (always true with no items)
    pub fn last_page(&self) -> bool {
        match self.page_length {
            PageLength::Disabled => true,
            PageLength::Enabled(_) => self.current_page() >= self.total_pages(),
        }
    }

    /// Whether there is a page after the current one
    pub fn not_last_page(&self) -> bool {
        !self.last_page()
    }

    // ------------------------------------------------------------------------
    // Windowed iterator
    // ------------------------------------------------------------------------

    /// Iterate over the items of the current page
    ///
    /// Yields the whole source when paging is disabled or slicing is off.
    /// Reading the window never touches the total item count.
    pub fn iter(&self) -> PageIter<'_, S::Item> {
        let inner = match self.page_length {
            PageLength::Enabled(size) if self.limit_items => {
                self.source.iter_range(self.page_start(), size.get())
            }
            _ => self.source.iter_all(),
        };
        PageIter { inner }
    }
}

impl<'a, S: ItemSource> IntoIterator for &'a PaginatedList<S> {
    type Item = &'a S::Item;
    type IntoIter = PageIter<'a, S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the items visible on the current page
pub struct PageIter<'a, T> {
    inner: ItemIter<'a, T>,
}

impl<'a, T> Iterator for PageIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> std::fmt::Debug for PageIter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageIter").finish_non_exhaustive()
    }
}
