use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_program(dir: &tempfile::TempDir, name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).expect("write program");
    path
}

#[test]
fn bftty_prints_output() {
    let dir = tempdir().expect("create temp dir");
    let program = write_program(&dir, "add.bf", "++++>,<[->+<]>.");

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg(&program).arg("a");
    cmd.assert()
        .success()
        .stdout("e\n")
        .stderr(predicate::str::contains("source exhausted"));
}

#[test]
fn bftty_quiet_suppresses_progress() {
    let dir = tempdir().expect("create temp dir");
    // 49 increments is ASCII '1'
    let source = "+".repeat(49) + ".";
    let program = write_program(&dir, "one.bf", &source);

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg(&program).arg("--quiet");
    cmd.assert().success().stdout("1\n").stderr("");
}

#[test]
fn bftty_reports_instruction_limit() {
    let dir = tempdir().expect("create temp dir");
    let program = write_program(&dir, "spin.bf", "+[]");

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg(&program).args(["--max-instructions", "500"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("instruction limit reached after 500"));
}

#[test]
fn bftty_missing_file_fails() {
    let dir = tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg(dir.path().join("missing.bf"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn bftty_bracket_overflow_fails() {
    let dir = tempdir().expect("create temp dir");
    let program = write_program(&dir, "deep.bf", "[[[]]]");

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg(&program).args(["--bracket-capacity", "2"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Too many brackets"));
}

#[test]
fn bftty_set_zero_flag() {
    let dir = tempdir().expect("create temp dir");
    // 48 increments print '0' unless `0` clears the cell first
    let source = "+".repeat(48) + ".0" + &"+".repeat(49) + ".";
    let program = write_program(&dir, "zero.bf", &source);

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg(&program).arg("--quiet");
    cmd.assert().success().stdout("0a\n");

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg(&program).args(["--quiet", "--set-zero"]);
    cmd.assert().success().stdout("01\n");
}

#[test]
fn bftty_runs_demos() {
    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg("demos/hello.bf").arg("-q");
    cmd.assert().success().stdout("Hello World!\n\n");

    let mut cmd = Command::cargo_bin("bftty").expect("binary exists");
    cmd.arg("demos/add.bf").arg("a").arg("-q");
    cmd.assert().success().stdout("e\n");
}
