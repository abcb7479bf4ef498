//! Command-line interface for taskgrid
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::grid::GridModel;
use crate::source;

mod check;
mod grid;
mod init;
mod months;
mod summary;
mod view;

/// taskgrid - Task-by-month progress grids
///
/// Loads a CSV progress log (task,year,month,progress,status,comment) and
/// renders a task-by-month grid, a per-task summary, and an interactive
/// terminal viewer.
#[derive(Parser, Debug)]
#[command(name = "taskgrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the CSV data source (defaults to the configured source)
    #[arg(long, global = true, env = "TASKGRID_SOURCE")]
    pub source: Option<PathBuf>,

    /// First year of the grid (defaults to the configured range)
    #[arg(long, global = true)]
    pub start_year: Option<i32>,

    /// Last year of the grid, inclusive
    #[arg(long, global = true)]
    pub end_year: Option<i32>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the task-by-month progress grid
    Grid,

    /// Show the per-task latest-known summary
    Summary,

    /// List the months of the grid axis
    Months,

    /// Parse the data source and report diagnostics
    Check,

    /// Open the interactive grid viewer
    View,

    /// Write a default .taskgrid.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Resolved inputs shared by every data-driven subcommand.
pub struct Context {
    pub config: Config,
    pub source_path: PathBuf,
}

impl Context {
    pub fn resolve(
        source: Option<PathBuf>,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut config = Config::load_from_dir(&cwd);

        if let Some(year) = start_year {
            config.range.start_year = year;
        }
        if let Some(year) = end_year {
            config.range.end_year = year;
        }
        if config.range.start_year > config.range.end_year {
            return Err(crate::error::Error::InvalidArgument(format!(
                "start year {} is after end year {}",
                config.range.start_year, config.range.end_year
            )));
        }

        let source_path = source::resolve_path(source, &config.source);
        Ok(Self {
            config,
            source_path,
        })
    }

    /// Load the source text and build the full grid model.
    pub fn load_model(&self) -> Result<GridModel> {
        let text = source::load_text(&self.source_path)?;
        let rows = crate::csv::parse(&text);
        Ok(GridModel::build(
            &rows,
            &self.config.labels.month_table(),
            self.config.range.start_year,
            self.config.range.end_year,
        ))
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Grid => grid::run(grid::GridOptions {
                source: self.source,
                start_year: self.start_year,
                end_year: self.end_year,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Summary => summary::run(summary::SummaryOptions {
                source: self.source,
                start_year: self.start_year,
                end_year: self.end_year,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Months => months::run(months::MonthsOptions {
                start_year: self.start_year,
                end_year: self.end_year,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Check => check::run(check::CheckOptions {
                source: self.source,
                start_year: self.start_year,
                end_year: self.end_year,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::View => view::run(view::ViewOptions {
                source: self.source,
                start_year: self.start_year,
                end_year: self.end_year,
            }),
            Commands::Init { force } => init::run(init::InitOptions {
                force,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
