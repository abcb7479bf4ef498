use taskgrid::axis::{build_month_axis, default_labels};
use taskgrid::csv::parse;
use taskgrid::grid::GridModel;
use taskgrid::record::clamp_progress;

fn build(text: &str, start_year: i32, end_year: i32) -> GridModel {
    let rows = parse(text);
    GridModel::build(&rows, &default_labels(), start_year, end_year)
}

#[test]
fn clamp_progress_table() {
    let cases = [("abc", 0.0), ("", 0.0), ("-5", 0.0), ("150", 100.0), ("42", 42.0)];
    for (input, expected) in cases {
        assert_eq!(clamp_progress(input), expected, "input {input:?}");
    }
}

#[test]
fn month_axis_for_one_year() {
    let axis = build_month_axis(&default_labels(), 2026, 2026);
    assert_eq!(axis.len(), 12);
    assert_eq!(axis.first().map(|e| e.key.as_str()), Some("2026-01"));
    assert_eq!(axis.last().map(|e| e.key.as_str()), Some("2026-12"));
    for pair in axis.windows(2) {
        assert!(pair[0].key < pair[1].key, "axis must ascend");
    }
}

#[test]
fn summary_keeps_last_nonempty_status_and_latest_progress() {
    let text = "task,year,month,progress,status,comment\n\
        X,2026,1,40,Planned,\n\
        X,2026,3,70,,\n";
    let model = build(text, 2026, 2026);

    let summary = model.summary("X");
    assert_eq!(summary.last_status, "Planned");
    assert_eq!(summary.last_progress, 70.0);
    assert_eq!(summary.last_comment, "");
}

#[test]
fn missing_task_is_excluded_without_error() {
    let text = "task,year,month,progress,status,comment\n\
        ,2026,1,50,Lost,\n\
        X,2026,1,25,,\n";
    let model = build(text, 2026, 2026);

    assert_eq!(model.tasks(), ["X"]);
    assert_eq!(model.index().len(), 1);
    assert_eq!(model.index().skipped(), 1);
}

#[test]
fn default_cell_carries_the_axis_month() {
    let model = build("task,year,month,progress\nX,2026,1,30\n", 2026, 2026);
    let june = &model.axis()[5];

    let cell = model.cell("X", june);
    assert_eq!(cell.task, "X");
    assert_eq!(cell.year, 2026);
    assert_eq!(cell.month, 6);
    assert_eq!(cell.progress, 0.0);
    assert_eq!(cell.status, "");
    assert_eq!(cell.comment, "");
}

#[test]
fn duplicate_task_month_keeps_the_last_row() {
    let text = "task,year,month,progress\n\
        X,2026,1,10\n\
        X,2026,1,95\n";
    let model = build(text, 2026, 2026);

    let january = &model.axis()[0];
    assert_eq!(model.cell("X", january).progress, 95.0);
}

#[test]
fn tasks_are_sorted_for_display() {
    let text = "task,year,month,progress\n\
        beta,2026,1,1\n\
        Alpha,2026,1,1\n\
        gamma,2026,1,1\n";
    let model = build(text, 2026, 2026);
    assert_eq!(model.tasks(), ["Alpha", "beta", "gamma"]);
}

#[test]
fn whole_pipeline_survives_malformed_data() {
    let text = "task,year,month,progress,status,comment\n\
        X,never,1,abc,,\n\
        X,2026,0,12,,\n\
        X,2026,99,12,,\n\
        \"Y\",-4,2,500,ok,\n";
    let model = build(text, 2026, 2026);

    // two rows coerce to zero and drop; month 99 and year -4 pass through
    assert_eq!(model.index().skipped(), 2);
    assert_eq!(model.index().len(), 2);
    assert_eq!(model.summary("Y").last_progress, 100.0);
    assert_eq!(model.summary("Y").last_status, "ok");
}
