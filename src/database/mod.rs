//! Database query support via DuckDB
//!
//! This module provides the query-execution side of pagination: run a query
//! for one page and report how many rows it has without its limit.

mod engine;

pub use engine::{build_page_query, DatabaseEngine};
