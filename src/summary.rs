//! Per-task latest-known summaries
//!
//! Scans every row of a task in chronological (year, month) order and keeps
//! the most recent non-empty status and comment, plus the progress of the
//! chronologically last row regardless of emptiness.

use std::collections::HashMap;

use serde::Serialize;

use crate::csv::RawRecord;
use crate::record::{clamp_progress, coerce_int};

/// Latest-known snapshot for one task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskSummary {
    pub last_progress: f64,
    pub last_status: String,
    pub last_comment: String,
}

/// Build the per-task summary map.
///
/// Rows are stable-sorted by coerced (year, month), with unparseable
/// values sorting as zero and ties keeping input order, then scanned per
/// task. Progress
/// overwrites unconditionally; status and comment only when the trimmed
/// value is non-empty. Tasks with no rows get the zero-value summary.
pub fn build_summary(rows: &[RawRecord], tasks: &[String]) -> HashMap<String, TaskSummary> {
    let mut ordered: Vec<&RawRecord> = rows.iter().collect();
    ordered.sort_by_key(|row| (coerce_int(row.get("year")), coerce_int(row.get("month"))));

    let mut summaries = HashMap::new();
    for task in tasks {
        let mut summary = TaskSummary::default();

        for row in &ordered {
            if row.get("task") != task {
                continue;
            }
            summary.last_progress = clamp_progress(row.get("progress"));

            let status = row.get("status").trim();
            if !status.is_empty() {
                summary.last_status = status.to_string();
            }
            let comment = row.get("comment").trim();
            if !comment.is_empty() {
                summary.last_comment = comment.to_string();
            }
        }

        summaries.insert(task.clone(), summary);
    }

    summaries
}
