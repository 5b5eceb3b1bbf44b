//! Pagination module
//!
//! Page arithmetic, windowed iteration, page lists, elided summaries and
//! navigation links over any [`ItemSource`](crate::source::ItemSource).
//!
//! # Overview
//!
//! A [`PaginatedList`] holds an offset, a page length and a total item count.
//! Everything else (current page, page count, first/last item, links) is
//! derived from those three on demand. A page length of zero disables paging
//! and turns the whole collection into a single page.

mod links;
mod list;
mod types;
mod window;

pub use links::{parse_offset, QueryParams, DEFAULT_PAGINATION_PARAM};
pub use list::{PageIter, PaginatedList};
pub use types::{LimitedQuery, Navigation, PageDescriptor, PageLength, QueryLimit, QueryPage};
pub use window::{page_window, summary_entries, DEFAULT_SUMMARY_CONTEXT};
