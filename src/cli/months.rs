//! taskgrid months command implementation
//!
//! Lists the month axis derived from the configured year range.

use serde::Serialize;

use crate::axis::MonthEntry;
use crate::error::Result;

use super::Context;

/// Options for the months command
pub struct MonthsOptions {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct MonthsReport {
    months: Vec<MonthEntry>,
    total: usize,
}

pub fn run(options: MonthsOptions) -> Result<()> {
    let context = Context::resolve(None, options.start_year, options.end_year)?;
    let months = crate::axis::build_month_axis(
        &context.config.labels.month_table(),
        context.config.range.start_year,
        context.config.range.end_year,
    );

    if options.json {
        let report = MonthsReport {
            total: months.len(),
            months,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    for entry in &months {
        println!("{}  {}", entry.key, entry.label);
    }

    Ok(())
}
