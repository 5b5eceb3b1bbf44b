//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginated view inspector
#[derive(Parser, Debug)]
#[command(name = "paged-view")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// View configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show navigation state for a collection of the given size
    Summary {
        /// Total number of items
        #[arg(long)]
        total: usize,

        /// Items per page (0 disables paging, defaults to the config)
        #[arg(long)]
        page_length: Option<usize>,

        /// Offset of the first item on the page
        #[arg(long, conflicts_with = "page")]
        start: Option<usize>,

        /// One-based page number
        #[arg(long)]
        page: Option<usize>,

        /// Request URL whose parameters links should keep
        #[arg(long)]
        url: Option<String>,

        /// Maximum number of entries in the page list
        #[arg(long)]
        limit: Option<usize>,

        /// Context pages around the current page in the summary
        #[arg(long)]
        context: Option<usize>,
    },

    /// Run a query and show one page of its rows
    Query {
        /// DuckDB database file (in-memory when omitted)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Statements to run before the query (e.g. to create or attach tables)
        #[arg(long)]
        setup: Option<String>,

        /// SELECT statement to paginate
        #[arg(long)]
        sql: String,

        /// Request URL carrying the offset parameter
        #[arg(long)]
        url: Option<String>,

        /// Items per page (0 fetches every row, defaults to the config)
        #[arg(long)]
        page_length: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
