//! taskgrid summary command implementation
//!
//! Per-task latest-known status, comment, and progress, as a table or JSON.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::record::format_progress;

use super::Context;

/// Options for the summary command
pub struct SummaryOptions {
    pub source: Option<PathBuf>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct SummaryEntry {
    task: String,
    last_progress: f64,
    last_status: String,
    last_comment: String,
}

#[derive(Serialize)]
struct SummaryReport {
    source: String,
    entries: Vec<SummaryEntry>,
    total: usize,
}

pub fn run(options: SummaryOptions) -> Result<()> {
    let context = Context::resolve(options.source, options.start_year, options.end_year)?;
    let model = context.load_model()?;
    let placeholder = context.config.labels.placeholder.clone();

    let entries: Vec<SummaryEntry> = model
        .tasks()
        .iter()
        .map(|task| {
            let summary = model.summary(task);
            SummaryEntry {
                task: task.clone(),
                last_progress: summary.last_progress,
                last_status: summary.last_status,
                last_comment: summary.last_comment,
            }
        })
        .collect();

    if options.json {
        let report = SummaryReport {
            source: context.source_path.display().to_string(),
            total: entries.len(),
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if entries.is_empty() {
        println!("No tasks in {}.", context.source_path.display());
        return Ok(());
    }

    let task_width = entries
        .iter()
        .map(|entry| entry.task.chars().count())
        .chain(std::iter::once("Task".len()))
        .max()
        .unwrap_or(0);
    let status_width = entries
        .iter()
        .map(|entry| display_or(&entry.last_status, &placeholder).chars().count())
        .chain(std::iter::once("Status".len()))
        .max()
        .unwrap_or(0);

    println!(
        "{:<task_width$}  {:<status_width$}  {:>8}  Comment",
        "Task", "Status", "Progress"
    );
    for entry in &entries {
        println!(
            "{:<task_width$}  {:<status_width$}  {:>7}%  {}",
            entry.task,
            display_or(&entry.last_status, &placeholder),
            format_progress(entry.last_progress),
            display_or(&entry.last_comment, &placeholder),
        );
    }

    Ok(())
}

fn display_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
