//! # paged-view
//!
//! A paginated view engine. Given an ordered collection, a page size and an
//! offset it works out page boundaries and navigation state, builds a compact
//! page summary with gap markers, and hands out a lazy window over the
//! current page without copying the collection.
//!
//! ## Quick Start
//!
//! ```rust
//! use paged_view::pagination::{PaginatedList, QueryParams};
//!
//! let request = QueryParams::parse("https://example.com/posts?tag=rust&start=50")?;
//! let items: Vec<u32> = (1..=250).collect();
//! let list = PaginatedList::with_request(items, request);
//!
//! assert_eq!(list.current_page(), 6);
//! assert_eq!(list.total_pages(), 25);
//! assert_eq!(list.iter().next(), Some(&51));
//!
//! let pages: Vec<_> = list
//!     .pagination_summary(4)
//!     .into_iter()
//!     .map(|page| page.page_num)
//!     .collect();
//! assert_eq!(
//!     pages,
//!     [Some(1), None, Some(4), Some(5), Some(6), Some(7), Some(8), None, Some(25)]
//! );
//! assert_eq!(
//!     list.next_link().as_deref(),
//!     Some("https://example.com/posts?tag=rust&start=60")
//! );
//! # Ok::<(), paged_view::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   count / range   ┌──────────────────────────────┐
//! │  ItemSource  │◄──────────────────│        PaginatedList         │
//! │ Vec, slice,  │                   │ start · length · total items │
//! │ QueryPage    │                   ├──────────┬─────────┬─────────┤
//! └──────────────┘                   │  window  │ pages / │  links  │
//! ┌──────────────┐  limit + total    │ iterator │ summary │         │
//! │ LimitedQuery │──────────────────►│          │         │         │
//! │  (DuckDB)    │                   └──────────┴─────────┴─────────┘
//! └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Item sources the view reads from
pub mod source;

/// Page arithmetic, windows, summaries and links
pub mod pagination;

/// View configuration
pub mod config;

/// DuckDB query collaborator
pub mod database;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use source::ItemSource;

pub use config::{load_config, ViewConfig};
pub use pagination::{
    LimitedQuery, Navigation, PageDescriptor, PageLength, PaginatedList, QueryLimit, QueryPage,
    QueryParams,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
