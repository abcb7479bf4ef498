use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn taskgrid_help_works() {
    Command::cargo_bin("taskgrid")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Task-by-month"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = ["grid", "summary", "months", "check", "view", "init"];

    for cmd in subcommands {
        Command::cargo_bin("taskgrid")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}
