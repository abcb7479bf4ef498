//! View model for the grid viewer
//!
//! Flattens the grid model into the row/column shape the renderer walks:
//! one row of cells per task, aligned with the month axis, plus the
//! per-task summaries. Cells remember whether a real record backed them so
//! the view can dim the defaults.

use crate::axis::MonthEntry;
use crate::grid::GridModel;
use crate::record::TaskRecord;
use crate::summary::TaskSummary;

pub struct CellView {
    pub record: TaskRecord,
    /// Whether an indexed record backs this cell (false for defaults).
    pub present: bool,
}

pub struct ViewModel {
    pub tasks: Vec<String>,
    pub axis: Vec<MonthEntry>,
    /// One row per task, one cell per axis entry.
    pub rows: Vec<Vec<CellView>>,
    /// Aligned with `tasks`.
    pub summaries: Vec<TaskSummary>,
    pub skipped_rows: usize,
    pub record_count: usize,
}

impl ViewModel {
    pub fn build(model: &GridModel) -> Self {
        let tasks = model.tasks().to_vec();
        let axis = model.axis().to_vec();

        let rows = tasks
            .iter()
            .map(|task| {
                axis.iter()
                    .map(|entry| CellView {
                        present: model.record(task, entry).is_some(),
                        record: model.cell(task, entry),
                    })
                    .collect()
            })
            .collect();

        let summaries = tasks.iter().map(|task| model.summary(task)).collect();

        Self {
            tasks,
            axis,
            rows,
            summaries,
            skipped_rows: model.index().skipped(),
            record_count: model.record_count(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() || self.axis.is_empty()
    }
}
