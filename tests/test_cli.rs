//! End-to-end tests driving the mish binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn mish() -> Command {
    Command::cargo_bin("mish").unwrap()
}

#[test]
fn dash_c_runs_a_single_line() {
    mish()
        .args(["-c", "echo hi"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn dash_c_exit_code_is_the_command_status() {
    mish().args(["-c", "false"]).assert().code(1);
    mish().args(["-c", "true"]).assert().success();
}

#[test]
fn dash_c_without_a_command_is_an_error() {
    mish().arg("-c").assert().code(2);
}

#[test]
fn heredoc_reads_continuation_from_stdin() {
    mish()
        .args(["-c", "cat HERE{"])
        .write_stdin("hello\nworld\n}\n")
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn unknown_command_reports_on_stderr() {
    mish()
        .args(["-c", "definitely-not-a-real-command-xyz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("command not found"));
}

#[test]
fn nforks_starts_at_zero() {
    mish().args(["-c", "nforks"]).assert().success().stdout("0\n");
}

#[test]
fn background_launch_prints_a_pid_line() {
    mish()
        .args(["-c", "sleep 5 &"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[1\] \d+\n$").unwrap());
}

#[test]
fn script_files_run_line_by_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let script = dir.path().join("demo.mish");
    fs::write(
        &script,
        format!("MISH_CLI_VAR=from-script\necho $MISH_CLI_VAR > {}\n", out.display()),
    )
    .unwrap();

    mish().arg(&script).assert().success();
    assert_eq!(fs::read_to_string(&out).unwrap(), "from-script\n");
}

#[test]
fn missing_script_is_an_error() {
    mish()
        .arg("/definitely/not/a/script.mish")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("script.mish"));
}

#[test]
fn version_flag_prints_the_version() {
    mish()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mish"));
}
