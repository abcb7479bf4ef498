//! taskgrid check command implementation
//!
//! Parses the data source and reports what the grid will be built from:
//! record counts, indexed cells, and rows excluded by the lenient
//! validation rule. Nothing here fails on malformed data; a bad file just
//! produces a report full of warnings.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

use super::Context;

/// Options for the check command
pub struct CheckOptions {
    pub source: Option<PathBuf>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct CheckReport {
    source: String,
    records: usize,
    tasks: usize,
    indexed_cells: usize,
    skipped_rows: usize,
    months: usize,
    start_year: i32,
    end_year: i32,
}

pub fn run(options: CheckOptions) -> Result<()> {
    let context = Context::resolve(options.source, options.start_year, options.end_year)?;
    let model = context.load_model()?;

    let report = CheckReport {
        source: context.source_path.display().to_string(),
        records: model.record_count(),
        tasks: model.tasks().len(),
        indexed_cells: model.index().len(),
        skipped_rows: model.index().skipped(),
        months: model.axis().len(),
        start_year: context.config.range.start_year,
        end_year: context.config.range.end_year,
    };

    let header = if report.records == 0 {
        "taskgrid check: no records parsed".to_string()
    } else {
        "taskgrid check: source parsed".to_string()
    };

    let mut human = HumanOutput::new(header);
    human.push_summary("source", report.source.clone());
    human.push_summary("records", report.records.to_string());
    human.push_summary("tasks", report.tasks.to_string());
    human.push_summary(
        "range",
        format!("{}..={}", report.start_year, report.end_year),
    );

    human.push_detail(format!("indexed cells: {}", report.indexed_cells));
    human.push_detail(format!("axis months: {}", report.months));

    if report.records == 0 {
        human.push_warning("source has no data rows".to_string());
    }
    if report.skipped_rows > 0 {
        human.push_warning(format!(
            "{} row(s) skipped: missing task or unparseable year/month",
            report.skipped_rows
        ));
    }

    human.push_next_step("taskgrid grid".to_string());
    human.push_next_step("taskgrid summary".to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "check",
        &report,
        Some(&human),
    )?;

    Ok(())
}
