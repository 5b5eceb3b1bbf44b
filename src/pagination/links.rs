//! Query-parameter source and navigation links
//!
//! Links are built by copying the request's parameters and overriding the
//! pagination parameter with a target offset. The request itself is never
//! modified.

use super::list::PaginatedList;
use crate::error::Result;
use crate::source::ItemSource;
use url::{form_urlencoded, Url};

/// Default name of the offset query parameter
pub const DEFAULT_PAGINATION_PARAM: &str = "start";

/// Immutable view of a request's query parameters
///
/// Holds an optional base URL and the parameters in their original order.
/// Without a base URL links render as a bare query string (`?start=10`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    base: Option<Url>,
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter source
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an absolute URL, keeping its query parameters
    pub fn parse(url: &str) -> Result<Self> {
        let mut base = Url::parse(url)?;
        let params = base.query_pairs().into_owned().collect();
        base.set_query(None);
        Ok(Self {
            base: Some(base),
            params,
        })
    }

    /// Create a base-less source from key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            base: None,
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Base URL links are built on, if any
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// All parameters in request order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// First value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Read a parameter as a non-negative offset
    ///
    /// Missing, negative and non-numeric values all read as 0.
    pub fn offset(&self, key: &str) -> usize {
        self.get(key).map_or(0, parse_offset)
    }

    /// Copy of the parameters with one key overridden
    ///
    /// The first occurrence keeps its position; later duplicates are dropped.
    /// An absent key is appended.
    pub fn with_override(&self, key: &str, value: &str) -> Vec<(String, String)> {
        let mut replaced = false;
        let mut out = Vec::with_capacity(self.params.len() + 1);
        for (k, v) in &self.params {
            if k == key {
                if !replaced {
                    out.push((k.clone(), value.to_string()));
                    replaced = true;
                }
            } else {
                out.push((k.clone(), v.clone()));
            }
        }
        if !replaced {
            out.push((key.to_string(), value.to_string()));
        }
        out
    }

    /// Render a link carrying every parameter with `key` set to `value`
    pub fn link_with(&self, key: &str, value: &str) -> String {
        let pairs = self.with_override(key, value);
        match &self.base {
            Some(base) => {
                let mut url = base.clone();
                url.query_pairs_mut().clear().extend_pairs(&pairs);
                url.to_string()
            }
            None => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&pairs)
                    .finish();
                format!("?{query}")
            }
        }
    }
}

/// Parse an offset, clamping anything invalid to 0
pub fn parse_offset(value: &str) -> usize {
    value.trim().parse::<usize>().unwrap_or(0)
}

impl<S: ItemSource> PaginatedList<S> {
    /// Link to the page starting at `offset`
    pub fn link_to_offset(&self, offset: usize) -> String {
        self.request()
            .link_with(self.pagination_param(), &offset.to_string())
    }

    /// Link to the given one-based page
    pub fn link_to_page(&self, page: usize) -> String {
        let offset = page.saturating_sub(1).saturating_mul(self.page_length());
        self.link_to_offset(offset)
    }

    /// Link to the first page
    pub fn first_link(&self) -> String {
        self.link_to_offset(0)
    }

    /// Link to the last page
    pub fn last_link(&self) -> String {
        self.link_to_offset(self.last_page_start())
    }

    /// Link to the next page, `None` on the last page or with paging disabled
    pub fn next_link(&self) -> Option<String> {
        if self.page_length_mode().is_disabled() || self.last_page() {
            return None;
        }
        Some(self.link_to_offset(self.page_start().saturating_add(self.page_length())))
    }

    /// Link to the previous page, `None` on the first page or with paging disabled
    pub fn prev_link(&self) -> Option<String> {
        if self.page_length_mode().is_disabled() || self.first_page() {
            return None;
        }
        Some(self.link_to_offset(
            self.page_start().saturating_sub(self.page_length()),
        ))
    }

    /// Offset of the final non-empty page
    fn last_page_start(&self) -> usize {
        self.total_pages()
            .saturating_sub(1)
            .saturating_mul(self.page_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_params_in_order() {
        let params =
            QueryParams::parse("http://example.com/my-cool-page?awesomeness=nextLevel&start=20")
                .unwrap();
        assert_eq!(params.get("awesomeness"), Some("nextLevel"));
        assert_eq!(params.offset("start"), 20);
        assert_eq!(params.params()[0].0, "awesomeness");
        assert_eq!(
            params.base().map(Url::as_str),
            Some("http://example.com/my-cool-page")
        );
    }

    #[test]
    fn test_offset_clamps_invalid_values() {
        let params = QueryParams::from_pairs([("a", "-5"), ("b", "abc"), ("c", " 7 ")]);
        assert_eq!(params.offset("a"), 0);
        assert_eq!(params.offset("b"), 0);
        assert_eq!(params.offset("c"), 7);
        assert_eq!(params.offset("missing"), 0);
    }

    #[test]
    fn test_override_replaces_in_place() {
        let params = QueryParams::from_pairs([("start", "5"), ("q", "x"), ("start", "9")]);
        let pairs = params.with_override("start", "10");
        assert_eq!(
            pairs,
            vec![
                ("start".to_string(), "10".to_string()),
                ("q".to_string(), "x".to_string()),
            ]
        );
        // source untouched
        assert_eq!(params.get("start"), Some("5"));
    }

    #[test]
    fn test_link_without_base_is_relative() {
        let params = QueryParams::from_pairs([("q", "a b")]);
        assert_eq!(params.link_with("start", "10"), "?q=a+b&start=10");
        assert_eq!(QueryParams::new().link_with("start", "0"), "?start=0");
    }

    #[test]
    fn test_link_with_base() {
        let params = QueryParams::parse("https://example.com/list?page=x").unwrap();
        assert_eq!(
            params.link_with("start", "30"),
            "https://example.com/list?page=x&start=30"
        );
    }
}
