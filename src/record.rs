//! Typed task records and lenient value coercion
//!
//! A `TaskRecord` is the typed projection of a parsed CSV row. Coercion is
//! deliberately lenient: a row is only rejected when its task is empty or
//! its year/month fail to parse or parse to zero. Out-of-range values pass
//! through untouched, non-numeric progress clamps to 0. Nothing here
//! returns an error.

use serde::Serialize;

use crate::csv::RawRecord;

/// Typed projection of one CSV row, identified by task + year + month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    pub task: String,
    pub year: i32,
    pub month: i32,
    pub progress: f64,
    pub status: String,
    pub comment: String,
}

impl TaskRecord {
    /// Project a raw row into a typed record.
    ///
    /// Returns `None` when `task` is empty or `year`/`month` coerce to
    /// zero, mirroring the grid's row-exclusion rule.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let task = raw.get("task");
        let year = coerce_int(raw.get("year"));
        let month = coerce_int(raw.get("month"));
        if task.is_empty() || year == 0 || month == 0 {
            return None;
        }
        Some(Self {
            task: task.to_string(),
            year,
            month,
            progress: clamp_progress(raw.get("progress")),
            status: raw.get("status").to_string(),
            comment: raw.get("comment").to_string(),
        })
    }
}

/// Numeric coercion: empty input is 0, unparseable input is NaN.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Integer coercion for year/month: unparseable input becomes 0, which
/// excludes the row; fractions truncate.
pub fn coerce_int(raw: &str) -> i32 {
    let n = coerce_number(raw);
    if n.is_nan() {
        0
    } else {
        n as i32
    }
}

/// Clamp a progress value into [0, 100]; non-numeric input maps to 0.
pub fn clamp_progress(raw: &str) -> f64 {
    let n = coerce_number(raw);
    if n.is_nan() {
        0.0
    } else {
        n.clamp(0.0, 100.0)
    }
}

/// Render a progress value the way it was written: integral values drop
/// the fraction, everything else keeps it.
pub fn format_progress(progress: f64) -> String {
    if progress.fract() == 0.0 {
        format!("{}", progress as i64)
    } else {
        format!("{progress}")
    }
}

/// Unique non-empty task names across all rows, in display order.
///
/// Ordering is case-insensitive with byte order as tiebreaker.
pub fn distinct_tasks(rows: &[RawRecord]) -> Vec<String> {
    let mut tasks: Vec<String> = Vec::new();
    for row in rows {
        let task = row.get("task");
        if task.is_empty() || tasks.iter().any(|seen| seen == task) {
            continue;
        }
        tasks.push(task.to_string());
    }
    tasks.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    tasks
}
