//! taskgrid view command implementation
//!
//! Thin launcher for the interactive grid viewer.

use std::path::PathBuf;

use crate::error::Result;
use crate::ui::grid_viewer;

use super::Context;

/// Options for the view command
pub struct ViewOptions {
    pub source: Option<PathBuf>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

pub fn run(options: ViewOptions) -> Result<()> {
    let context = Context::resolve(options.source, options.start_year, options.end_year)?;
    // Fail before touching the terminal if the source is missing.
    let model = context.load_model()?;
    grid_viewer::run(context, model)
}
