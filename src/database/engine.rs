//! DuckDB-backed query collaborator
//!
//! Runs an arbitrary SELECT with LIMIT/OFFSET and separately counts the rows
//! the query would return without its limit. The result seeds a
//! [`PaginatedList`] that already holds just one page of rows.

use crate::error::{Error, Result};
use crate::pagination::{PaginatedList, QueryLimit, QueryPage, QueryParams};
use duckdb::Connection;
use serde_json::Value;
use std::path::Path;

/// Query engine using DuckDB
pub struct DatabaseEngine {
    /// DuckDB connection
    conn: Connection,
    /// Database location (for logging)
    location: String,
}

impl DatabaseEngine {
    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database(format!("Failed to create DuckDB connection: {e}")))?;
        Ok(Self {
            conn,
            location: ":memory:".to_string(),
        })
    }

    /// Open a database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            Error::database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        Ok(Self {
            conn,
            location: path.display().to_string(),
        })
    }

    /// Database location
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Run one or more statements without results
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| Error::query(format!("Failed to execute batch: {e}")))
    }

    /// Number of rows `query` returns, ignoring any limit
    pub fn count_rows(&self, query: &str) -> Result<usize> {
        let count_sql = format!("SELECT COUNT(*) FROM ({}) AS q", strip_terminator(query));
        tracing::debug!("Counting rows: {}", count_sql);

        let count: i64 = self
            .conn
            .query_row(&count_sql, [], |row| row.get(0))
            .map_err(|e| Error::query(format!("Failed to count rows: {e}")))?;

        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Fetch `limit` rows of `query` starting at `start` (0 = all rows)
    pub fn fetch_page(&self, query: &str, start: usize, limit: usize) -> Result<QueryPage<Value>> {
        let total_rows = self.count_rows(query)?;
        let page_sql = build_page_query(query, start, limit);
        tracing::debug!("Fetching page: {}", page_sql);

        let rows = self.query_json(&page_sql)?;
        Ok(QueryPage::new(rows, QueryLimit { limit, start }, total_rows))
    }

    /// Fetch the page a request points at and wrap it in a list
    ///
    /// Slicing happens in SQL, so the list has `limit_items` turned off and
    /// takes its page numbers from the query.
    pub fn paginate(
        &self,
        query: &str,
        request: QueryParams,
        pagination_param: &str,
        page_length: usize,
    ) -> Result<PaginatedList<QueryPage<Value>>> {
        // Disabled paging always starts at the first row
        let start = if page_length == 0 {
            0
        } else {
            request.offset(pagination_param)
        };
        tracing::debug!(
            database = %self.location,
            start,
            page_length,
            "Paginating query"
        );
        let page = self.fetch_page(query, start, page_length)?;

        let mut list = PaginatedList::from_limited_query(page, request);
        list.set_pagination_param(pagination_param);
        Ok(list)
    }

    /// Run a query and read its rows back as JSON objects
    fn query_json(&self, query: &str) -> Result<Vec<Value>> {
        // Use DuckDB's native JSON export via a temp file
        let temp_file =
            std::env::temp_dir().join(format!("paged_view_{}.json", uuid_simple()));
        let temp_path = temp_file
            .to_str()
            .ok_or_else(|| Error::database("Invalid temp path"))?;

        let copy_sql = format!("COPY ({query}) TO '{temp_path}' (FORMAT JSON, ARRAY true);");
        self.conn
            .execute_batch(&copy_sql)
            .map_err(|e| Error::query(format!("Failed to export JSON: {e}")))?;

        let json_content = std::fs::read_to_string(&temp_file)
            .map_err(|e| Error::database(format!("Failed to read JSON file: {e}")));
        let _ = std::fs::remove_file(&temp_file);
        let json_content = json_content?;

        if json_content.trim().is_empty() {
            return Ok(vec![]);
        }
        Ok(serde_json::from_str(&json_content)?)
    }
}

/// Append a LIMIT/OFFSET clause to `query` (limit 0 = no limit)
///
/// The clause is appended rather than wrapped so the query's own ORDER BY
/// still decides which rows land on the page.
pub fn build_page_query(query: &str, start: usize, limit: usize) -> String {
    let query = strip_terminator(query);
    if limit == 0 {
        format!("{query} OFFSET {start}")
    } else {
        format!("{query} LIMIT {limit} OFFSET {start}")
    }
}

fn strip_terminator(query: &str) -> &str {
    query.trim().trim_end_matches(';').trim_end()
}

/// Unique suffix for temp files (timestamp, process id and call counter)
fn uuid_simple() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{timestamp:x}_{:x}_{seq:x}", std::process::id())
}
