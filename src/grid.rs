//! Grid index and the assembled grid model
//!
//! The index maps `"<task>__<monthKey>"` to the matching typed record,
//! insertion order with last-write-wins on duplicates. `GridModel` bundles
//! the four outputs the presentation layer consumes: the month axis, the
//! sorted task list, cell lookup with a documented default, and the
//! per-task summary map.

use std::collections::HashMap;

use tracing::debug;

use crate::axis::{build_month_axis, month_key, MonthEntry};
use crate::csv::RawRecord;
use crate::record::{distinct_tasks, TaskRecord};
use crate::summary::{build_summary, TaskSummary};

/// Task + month lookup table.
#[derive(Debug, Clone, Default)]
pub struct GridIndex {
    cells: HashMap<String, TaskRecord>,
    skipped: usize,
}

impl GridIndex {
    /// Index every row that projects to a valid `TaskRecord`.
    ///
    /// Rows with an empty task or a year/month that coerces to zero are
    /// counted as skipped, not errors. Duplicate (task, month) pairs keep
    /// the last row seen.
    pub fn from_rows(rows: &[RawRecord]) -> Self {
        let mut cells = HashMap::new();
        let mut skipped = 0;

        for row in rows {
            match TaskRecord::from_raw(row) {
                Some(record) => {
                    let key = cell_key(&record.task, record.year, record.month);
                    cells.insert(key, record);
                }
                None => skipped += 1,
            }
        }

        debug!(indexed = cells.len(), skipped, "built grid index");
        Self { cells, skipped }
    }

    pub fn get(&self, task: &str, year: i32, month: i32) -> Option<&TaskRecord> {
        self.cells.get(&cell_key(task, year, month))
    }

    /// Rows excluded by the lenient validation rule.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of indexed (task, month) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn cell_key(task: &str, year: i32, month: i32) -> String {
    format!("{task}__{}", month_key(year, month))
}

/// Everything the rendering layer consumes, derived fresh from one parse.
#[derive(Debug, Clone)]
pub struct GridModel {
    axis: Vec<MonthEntry>,
    tasks: Vec<String>,
    index: GridIndex,
    summaries: HashMap<String, TaskSummary>,
    record_count: usize,
}

impl GridModel {
    /// Assemble the model from parsed rows and an inclusive year range.
    pub fn build(
        rows: &[RawRecord],
        labels: &[String; 12],
        start_year: i32,
        end_year: i32,
    ) -> Self {
        let tasks = distinct_tasks(rows);
        let axis = build_month_axis(labels, start_year, end_year);
        let index = GridIndex::from_rows(rows);
        let summaries = build_summary(rows, &tasks);

        Self {
            axis,
            tasks,
            index,
            summaries,
            record_count: rows.len(),
        }
    }

    /// The ordered month axis.
    pub fn axis(&self) -> &[MonthEntry] {
        &self.axis
    }

    /// Distinct task names in display order.
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// The indexed record for a cell, if one exists.
    pub fn record(&self, task: &str, entry: &MonthEntry) -> Option<&TaskRecord> {
        self.index.get(task, entry.year, entry.month)
    }

    /// The record for a cell, falling back to the documented default:
    /// the cell's own task and month with zero progress and empty text.
    pub fn cell(&self, task: &str, entry: &MonthEntry) -> TaskRecord {
        self.record(task, entry)
            .cloned()
            .unwrap_or_else(|| TaskRecord {
                task: task.to_string(),
                year: entry.year,
                month: entry.month,
                progress: 0.0,
                status: String::new(),
                comment: String::new(),
            })
    }

    /// Latest-known summary for a task; unknown tasks get the zero summary.
    pub fn summary(&self, task: &str) -> TaskSummary {
        self.summaries.get(task).cloned().unwrap_or_default()
    }

    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    /// Number of parsed CSV records the model was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(task: &str, year: &str, month: &str, progress: &str) -> RawRecord {
        RawRecord::from_pairs(&[
            ("task", task),
            ("year", year),
            ("month", month),
            ("progress", progress),
            ("status", ""),
            ("comment", ""),
        ])
    }

    fn labels() -> [String; 12] {
        crate::axis::default_labels()
    }

    #[test]
    fn duplicate_cells_keep_the_last_row() {
        let rows = vec![row("X", "2026", "1", "10"), row("X", "2026", "1", "90")];
        let index = GridIndex::from_rows(&rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("X", 2026, 1).expect("cell").progress, 90.0);
    }

    #[test]
    fn invalid_rows_are_skipped_not_fatal() {
        let rows = vec![
            row("", "2026", "1", "10"),
            row("X", "nope", "1", "10"),
            row("X", "2026", "2", "10"),
        ];
        let index = GridIndex::from_rows(&rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 2);
    }

    #[test]
    fn missing_cell_defaults_to_the_axis_month() {
        let model = GridModel::build(&[row("X", "2026", "1", "50")], &labels(), 2026, 2026);
        let march = &model.axis()[2];
        let cell = model.cell("X", march);
        assert_eq!(cell.task, "X");
        assert_eq!(cell.year, 2026);
        assert_eq!(cell.month, 3);
        assert_eq!(cell.progress, 0.0);
        assert_eq!(cell.status, "");
        assert_eq!(cell.comment, "");
    }

    #[test]
    fn model_wires_axis_tasks_and_summary_together() {
        let rows = vec![row("b", "2026", "2", "20"), row("a", "2026", "1", "80")];
        let model = GridModel::build(&rows, &labels(), 2026, 2026);
        assert_eq!(model.tasks(), ["a", "b"]);
        assert_eq!(model.axis().len(), 12);
        assert_eq!(model.summary("a").last_progress, 80.0);
        assert_eq!(model.summary("unknown"), TaskSummary::default());
    }

    #[test]
    fn out_of_range_month_is_indexed_but_never_hits_the_axis() {
        let model = GridModel::build(&[row("X", "2026", "13", "50")], &labels(), 2026, 2026);
        assert_eq!(model.index().len(), 1);
        for entry in model.axis() {
            assert!(model.record("X", entry).is_none());
        }
    }
}
