mod support;

use predicates::str::contains;
use support::{sample_csv, taskgrid_cmd, TestDir};

#[test]
fn grid_renders_tasks_and_progress() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    taskgrid_cmd(&dir)
        .args(["grid", "--start-year", "2026", "--end-year", "2026"])
        .assert()
        .success()
        .stdout(contains("Website"))
        .stdout(contains("Backend"))
        .stdout(contains("Ian 2026"))
        .stdout(contains("60%"));
}

#[test]
fn grid_json_reports_axis_and_cells() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    taskgrid_cmd(&dir)
        .args(["grid", "--json", "--start-year", "2026", "--end-year", "2026"])
        .assert()
        .success()
        .stdout(contains("\"2026-01\""))
        .stdout(contains("\"Website\""))
        .stdout(contains("\"progress\": 60.0"));
}

#[test]
fn summary_shows_latest_status_and_placeholder() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    taskgrid_cmd(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("In progress"))
        .stdout(contains("Website"))
        // Backend never sets a status, so the placeholder shows
        .stdout(contains("\u{2014}"));
}

#[test]
fn summary_json_carries_last_values() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    taskgrid_cmd(&dir)
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(contains("\"last_status\": \"In progress\""))
        .stdout(contains("\"last_progress\": 60.0"));
}

#[test]
fn months_lists_the_configured_axis() {
    let dir = TestDir::new();

    taskgrid_cmd(&dir)
        .args(["months", "--start-year", "2026", "--end-year", "2026"])
        .assert()
        .success()
        .stdout(contains("2026-01"))
        .stdout(contains("2026-12"))
        .stdout(contains("Dec 2026"));
}

#[test]
fn check_counts_records_and_skipped_rows() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    taskgrid_cmd(&dir)
        .args(["check", "--json"])
        .assert()
        .success()
        .stdout(contains("\"records\": 4"))
        .stdout(contains("\"indexed_cells\": 3"))
        .stdout(contains("\"skipped_rows\": 1"))
        .stdout(contains("\"tasks\": 2"));
}

#[test]
fn check_warns_on_skipped_rows_in_human_output() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    taskgrid_cmd(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(contains("row(s) skipped"));
}

#[test]
fn missing_source_is_a_user_error() {
    let dir = TestDir::new();

    taskgrid_cmd(&dir)
        .arg("grid")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Data source not found"));
}

#[test]
fn missing_source_json_envelope_has_error_status() {
    let dir = TestDir::new();

    taskgrid_cmd(&dir)
        .args(["check", "--json"])
        .assert()
        .failure()
        .code(2)
        .stdout(contains("\"status\": \"error\""))
        .stdout(contains("\"kind\": \"user_error\""));
}

#[test]
fn inverted_year_flags_are_rejected() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    taskgrid_cmd(&dir)
        .args(["grid", "--start-year", "2027", "--end-year", "2026"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn source_flag_overrides_config() {
    let dir = TestDir::new();
    dir.write_file("elsewhere.csv", sample_csv());
    dir.write_config("source = \"missing.csv\"\n");

    taskgrid_cmd(&dir)
        .args(["check", "--source", "elsewhere.csv", "--json"])
        .assert()
        .success()
        .stdout(contains("\"records\": 4"));
}

#[test]
fn config_range_drives_the_axis() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());
    dir.write_config("[range]\nstart_year = 2025\nend_year = 2025\n");

    taskgrid_cmd(&dir)
        .args(["months", "--json"])
        .assert()
        .success()
        .stdout(contains("\"total\": 12"))
        .stdout(contains("\"2025-01\""));
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let dir = TestDir::new();

    taskgrid_cmd(&dir).arg("init").assert().success();
    assert!(dir.path().join(".taskgrid.toml").exists());

    taskgrid_cmd(&dir)
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("already exists"));

    taskgrid_cmd(&dir)
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn quiet_suppresses_human_output() {
    let dir = TestDir::new();
    dir.write_source(sample_csv());

    let output = taskgrid_cmd(&dir)
        .args(["check", "--quiet"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.is_empty());
}
