//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, ViewConfig};
use crate::database::DatabaseEngine;
use crate::error::{Result, ResultExt};
use crate::pagination::{PaginatedList, QueryParams};
use crate::source::ItemSource;
use serde_json::{json, Value};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::Summary {
                total,
                page_length,
                start,
                page,
                url,
                limit,
                context,
            } => {
                let nav = Self::summary(
                    &config,
                    *total,
                    *page_length,
                    *start,
                    *page,
                    url.as_deref(),
                    *limit,
                    *context,
                )?;
                self.output_message(&nav);
                Ok(())
            }
            Commands::Query {
                database,
                setup,
                sql,
                url,
                page_length,
            } => {
                let page = Self::query(
                    &config,
                    database.as_deref(),
                    setup.as_deref(),
                    sql,
                    url.as_deref(),
                    *page_length,
                )?;
                self.output_message(&page);
                Ok(())
            }
        }
    }

    /// Load the view config, or defaults when none was given
    pub fn load_config(&self) -> Result<ViewConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(ViewConfig::default()),
        }
    }

    /// Log level to use: `--verbose` wins, then the config, then INFO
    pub fn log_level(&self) -> tracing::Level {
        if self.cli.verbose {
            return tracing::Level::DEBUG;
        }
        self.load_config()
            .ok()
            .and_then(|config| config.log_level)
            .map_or(tracing::Level::INFO, Into::into)
    }

    /// Navigation for a collection of `total` items
    #[allow(clippy::too_many_arguments)]
    pub fn summary(
        config: &ViewConfig,
        total: usize,
        page_length: Option<usize>,
        start: Option<usize>,
        page: Option<usize>,
        url: Option<&str>,
        limit: Option<usize>,
        context: Option<usize>,
    ) -> Result<Value> {
        let mut list = config.build_list(Vec::<()>::new(), Self::request(url)?);
        list.set_total_items(total);
        if let Some(length) = page_length {
            list.set_page_length(length);
        }
        if let Some(start) = start {
            list.set_page_start(start);
        }
        if let Some(page) = page {
            list.set_current_page(page);
        }

        Ok(json!({
            "type": "NAVIGATION",
            "navigation": Self::navigation(&list, config, limit, context),
        }))
    }

    /// One page of rows from a SQL query
    pub fn query(
        config: &ViewConfig,
        database: Option<&Path>,
        setup: Option<&str>,
        sql: &str,
        url: Option<&str>,
        page_length: Option<usize>,
    ) -> Result<Value> {
        let engine = match database {
            Some(path) => DatabaseEngine::open(path)?,
            None => DatabaseEngine::open_in_memory()?,
        };
        if let Some(setup) = setup {
            engine
                .execute_batch(setup)
                .context("Setup statements failed")?;
        }

        let list = engine.paginate(
            sql,
            Self::request(url)?,
            &config.pagination_param,
            page_length.unwrap_or(config.page_length),
        )?;
        let rows: Vec<&Value> = list.iter().collect();

        Ok(json!({
            "type": "PAGE",
            "rows": rows,
            "navigation": Self::navigation(&list, config, None, None),
        }))
    }

    fn navigation<S: ItemSource>(
        list: &PaginatedList<S>,
        config: &ViewConfig,
        limit: Option<usize>,
        context: Option<usize>,
    ) -> Value {
        let nav = list.navigation(
            limit.or(config.pages_limit),
            context.unwrap_or(config.summary_context),
        );
        serde_json::to_value(nav).unwrap_or_default()
    }

    fn request(url: Option<&str>) -> Result<QueryParams> {
        url.map_or_else(|| Ok(QueryParams::new()), QueryParams::parse)
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_command() {
        let config = ViewConfig::default();
        let msg = Runner::summary(
            &config,
            250,
            None,
            None,
            Some(6),
            Some("http://example.com/list?q=rust"),
            Some(5),
            None,
        )
        .unwrap();

        let nav = &msg["navigation"];
        assert_eq!(msg["type"], "NAVIGATION");
        assert_eq!(nav["current_page"], 6);
        assert_eq!(nav["total_pages"], 25);
        assert_eq!(nav["pages"].as_array().map(Vec::len), Some(5));
        assert_eq!(nav["summary"].as_array().map(Vec::len), Some(9));
        assert_eq!(nav["next_link"], "http://example.com/list?q=rust&start=60");
    }

    #[test]
    fn test_summary_rejects_bad_url() {
        let config = ViewConfig::default();
        let result = Runner::summary(&config, 10, None, None, None, Some("::"), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_command() {
        let config = ViewConfig {
            page_length: 4,
            ..ViewConfig::default()
        };
        let msg = Runner::query(
            &config,
            None,
            Some("CREATE TABLE t AS SELECT range AS id FROM range(0, 10);"),
            "SELECT id FROM t ORDER BY id",
            Some("http://example.com/?start=8"),
            None,
        )
        .unwrap();

        assert_eq!(msg["rows"], json!([{"id": 8}, {"id": 9}]));
        assert_eq!(msg["navigation"]["current_page"], 3);
        assert_eq!(msg["navigation"]["last_page"], true);
    }
}
