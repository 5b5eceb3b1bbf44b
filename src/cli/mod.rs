//! CLI module
//!
//! Command-line interface for inspecting paginated views.
//!
//! # Commands
//!
//! - `summary` - Navigation state for a given item count and offset
//! - `query` - Run a SQL query through DuckDB one page at a time

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
