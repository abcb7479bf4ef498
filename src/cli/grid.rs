//! taskgrid grid command implementation
//!
//! Renders the task-by-month grid as a text table: one row per task, one
//! column per axis month, each cell a block-character progress bar plus the
//! percentage. The current month's header is marked when it falls inside
//! the axis.

use std::path::PathBuf;

use chrono::Datelike;
use serde::Serialize;

use crate::axis::MonthEntry;
use crate::error::Result;
use crate::grid::GridModel;
use crate::record::{format_progress, TaskRecord};

use super::Context;

const BAR_WIDTH: usize = 6;
const BAR_FULL: char = '\u{2588}';
const BAR_EMPTY: char = '\u{2591}';
const TASK_COLUMN_MAX: usize = 24;

/// Options for the grid command
pub struct GridOptions {
    pub source: Option<PathBuf>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct GridReport {
    source: String,
    months: Vec<MonthEntry>,
    tasks: Vec<String>,
    rows: Vec<GridRow>,
}

#[derive(Serialize)]
struct GridRow {
    task: String,
    cells: Vec<TaskRecord>,
}

pub fn run(options: GridOptions) -> Result<()> {
    let context = Context::resolve(options.source, options.start_year, options.end_year)?;
    let model = context.load_model()?;

    if options.json {
        let rows = model
            .tasks()
            .iter()
            .map(|task| GridRow {
                task: task.clone(),
                cells: model
                    .axis()
                    .iter()
                    .map(|entry| model.cell(task, entry))
                    .collect(),
            })
            .collect();

        let report = GridReport {
            source: context.source_path.display().to_string(),
            months: model.axis().to_vec(),
            tasks: model.tasks().to_vec(),
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if model.tasks().is_empty() {
        println!("No tasks in {}.", context.source_path.display());
        return Ok(());
    }

    print!("{}", render_grid(&model));
    Ok(())
}

fn render_grid(model: &GridModel) -> String {
    let today = chrono::Local::now().date_naive();
    let task_width = model
        .tasks()
        .iter()
        .map(|task| task.chars().count())
        .chain(std::iter::once("Task".len()))
        .max()
        .unwrap_or(0)
        .min(TASK_COLUMN_MAX);
    let cell_width = model
        .axis()
        .iter()
        .map(|entry| entry.label.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .max(BAR_WIDTH + 6);

    let mut out = String::new();

    out.push_str(&pad("Task", task_width));
    for entry in model.axis() {
        let marker = if entry.year == today.year() && entry.month == today.month() as i32 {
            "*"
        } else {
            ""
        };
        out.push_str("  ");
        out.push_str(&pad(&format!("{}{marker}", entry.label), cell_width));
    }
    out.push('\n');

    for task in model.tasks() {
        out.push_str(&pad(&truncate(task, TASK_COLUMN_MAX), task_width));
        for entry in model.axis() {
            let cell = model.cell(task, entry);
            out.push_str("  ");
            out.push_str(&pad(&render_cell(&cell), cell_width));
        }
        out.push('\n');
    }

    out
}

fn render_cell(record: &TaskRecord) -> String {
    let filled = ((record.progress / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let mut bar = String::new();
    for _ in 0..filled {
        bar.push(BAR_FULL);
    }
    for _ in filled..BAR_WIDTH {
        bar.push(BAR_EMPTY);
    }
    format!("{bar} {}%", format_progress(record.progress))
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        let mut padded = text.to_string();
        padded.extend(std::iter::repeat(' ').take(width - len));
        padded
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_bar_scales_with_progress() {
        let record = TaskRecord {
            task: "X".to_string(),
            year: 2026,
            month: 1,
            progress: 50.0,
            status: String::new(),
            comment: String::new(),
        };
        let cell = render_cell(&record);
        assert_eq!(cell.chars().filter(|c| *c == BAR_FULL).count(), 3);
        assert!(cell.ends_with("50%"));
    }

    #[test]
    fn full_and_empty_bars_are_bounded() {
        let mut record = TaskRecord {
            task: "X".to_string(),
            year: 2026,
            month: 1,
            progress: 100.0,
            status: String::new(),
            comment: String::new(),
        };
        assert_eq!(
            render_cell(&record).chars().filter(|c| *c == BAR_FULL).count(),
            BAR_WIDTH
        );
        record.progress = 0.0;
        assert_eq!(
            render_cell(&record).chars().filter(|c| *c == BAR_EMPTY).count(),
            BAR_WIDTH
        );
    }

    #[test]
    fn long_task_names_are_truncated_with_ellipsis() {
        let truncated = truncate("a very long task name that keeps going", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('\u{2026}'));
    }
}
