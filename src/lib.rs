//! taskgrid - Task-by-month progress grids from CSV logs
//!
//! This library provides the core functionality for the taskgrid CLI tool:
//! parsing a CSV progress log and deriving the grid and summary views the
//! presentation layer consumes.
//!
//! # Core Concepts
//!
//! - **Records**: one CSV row per (task, year, month) with progress,
//!   status, and comment
//! - **Month Axis**: every month of an inclusive year range, in order
//! - **Grid Index**: (task, month) cell lookup with last-write-wins
//! - **Summary**: per-task latest-known progress/status/comment
//!
//! Parsing and aggregation never fail: malformed input degrades to
//! defaults (dropped rows, zero progress, empty text) instead of errors.
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.taskgrid.toml`
//! - `error`: Error types and result aliases
//! - `csv`: CSV tokenizer (quoting, escapes, CRLF/LF, blank-row handling)
//! - `record`: Typed records and lenient value coercion
//! - `axis`: Month axis construction
//! - `grid`: Grid index and the assembled grid model
//! - `summary`: Per-task latest-known summaries
//! - `source`: Data source loading
//! - `output`: Shared human/JSON output formatting
//! - `ui`: Interactive grid viewer (ratatui)

pub mod axis;
pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod grid;
pub mod output;
pub mod record;
pub mod source;
pub mod summary;
pub mod ui;

pub use error::{Error, Result};
