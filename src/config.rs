//! View configuration
//!
//! Page length, parameter name and summary settings, loaded from YAML or JSON
//! and applied to a [`PaginatedList`].

use crate::error::{Error, Result};
use crate::pagination::{
    PaginatedList, QueryParams, DEFAULT_PAGINATION_PARAM, DEFAULT_SUMMARY_CONTEXT,
};
use crate::source::ItemSource;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for building paginated views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Items per page (0 disables paging)
    #[serde(default = "default_page_length")]
    pub page_length: usize,

    /// Query parameter carrying the offset
    #[serde(default = "default_pagination_param")]
    pub pagination_param: String,

    /// Pages of context around the current page in a summary
    #[serde(default = "default_summary_context")]
    pub summary_context: usize,

    /// Cap on the number of entries in a page list
    #[serde(default)]
    pub pages_limit: Option<usize>,

    /// Restrict iteration to the current page
    #[serde(default = "default_true")]
    pub limit_items: bool,

    /// Log level for the binary
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

fn default_page_length() -> usize {
    10
}

fn default_pagination_param() -> String {
    DEFAULT_PAGINATION_PARAM.to_string()
}

fn default_summary_context() -> usize {
    DEFAULT_SUMMARY_CONTEXT
}

fn default_true() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_length: default_page_length(),
            pagination_param: default_pagination_param(),
            summary_context: default_summary_context(),
            pages_limit: None,
            limit_items: true,
            log_level: None,
        }
    }
}

impl ViewConfig {
    /// Parse from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.pagination_param.trim().is_empty() {
            return Err(Error::invalid_value(
                "pagination_param",
                "parameter name must not be empty",
            ));
        }
        if self.pages_limit == Some(0) {
            return Err(Error::invalid_value(
                "pages_limit",
                "omit the field to list every page",
            ));
        }
        Ok(())
    }

    /// Apply page length, parameter name and slicing to a list
    pub fn apply<S: ItemSource>(&self, list: &mut PaginatedList<S>) {
        list.set_page_length(self.page_length)
            .set_pagination_param(self.pagination_param.clone())
            .set_limit_items(self.limit_items);
    }

    /// Build a configured list over `source` reading its offset from `request`
    pub fn build_list<S: ItemSource>(&self, source: S, request: QueryParams) -> PaginatedList<S> {
        let mut list = PaginatedList::with_request(source, request);
        self.apply(&mut list);
        list
    }
}

/// Load a view config from a file
///
/// `.json` files are read as JSON, `.yaml`/`.yml` or extension-less files as
/// YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<ViewConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    tracing::debug!("Loading view config from {}", path.display());

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => ViewConfig::from_json_str(&content),
        Some("yaml" | "yml") | None => ViewConfig::from_yaml_str(&content),
        Some(other) => Err(Error::config(format!(
            "Unsupported config format '.{other}' for {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.page_length, 10);
        assert_eq!(config.pagination_param, "start");
        assert_eq!(config.summary_context, 4);
        assert!(config.limit_items);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
page_length: 25
pagination_param: offset
summary_context: 6
pages_limit: 7
limit_items: false
log_level: DEBUG
";
        let config = ViewConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.page_length, 25);
        assert_eq!(config.pagination_param, "offset");
        assert_eq!(config.summary_context, 6);
        assert_eq!(config.pages_limit, Some(7));
        assert!(!config.limit_items);
        assert_eq!(config.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_rejects_empty_param() {
        let err = ViewConfig::from_yaml_str("pagination_param: ''").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "pagination_param"));
    }

    #[test]
    fn test_rejects_zero_pages_limit() {
        let err = ViewConfig::from_json_str(r#"{"pages_limit": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_bad_yaml_is_parse_error() {
        let err = ViewConfig::from_yaml_str("page_length: [").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_build_list() {
        let config = ViewConfig {
            page_length: 3,
            pagination_param: "offset".to_string(),
            ..ViewConfig::default()
        };
        let request = QueryParams::from_pairs([("offset", "6")]);
        let list = config.build_list(vec![1, 2, 3, 4, 5, 6, 7, 8], request);

        assert_eq!(list.current_page(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![7, 8]);
        assert_eq!(list.first_link(), "?offset=0");
    }

    #[test]
    fn test_load_config_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("view.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "page_length: 0").unwrap();
        assert_eq!(load_config(&yaml_path).unwrap().page_length, 0);

        let json_path = dir.path().join("view.json");
        std::fs::write(&json_path, r#"{"summary_context": 2}"#).unwrap();
        assert_eq!(load_config(&json_path).unwrap().summary_context, 2);
    }

    #[test]
    fn test_load_config_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.toml");
        std::fs::write(&path, "page_length = 5").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
