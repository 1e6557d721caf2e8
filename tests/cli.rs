#![cfg(unix)]

mod common;

use assert_cmd::Command;
use common::{FakeTools, Sandbox, file_names};
use predicates::prelude::*;

fn build_release(sandbox: &Sandbox) -> Command {
    let mut cmd = Command::cargo_bin("build_release").unwrap();
    cmd.current_dir(sandbox.work_dir())
        .env("PATH", sandbox.bin_dir())
        .env("TMPDIR", sandbox.temp_dir())
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn help_exits_zero() {
    let sandbox = Sandbox::new(FakeTools::default());

    build_release(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output_dir"))
        .stdout(predicate::str::contains("--rpm"));
}

#[test]
fn missing_version_exits_one_with_message() {
    let sandbox = Sandbox::new(FakeTools::default());

    build_release(&sandbox)
        .args(["--commit", "abc123"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("resolve settings"))
        .stderr(predicate::str::contains("you must set --version"));

    assert!(file_names(&sandbox.temp_dir()).is_empty());
}

#[test]
fn missing_commit_exits_one_with_message() {
    let sandbox = Sandbox::new(FakeTools::default());

    build_release(&sandbox)
        .args(["--version", "1.2.3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("you must set --commit"));
}

#[test]
fn missing_tool_exits_one() {
    let sandbox = Sandbox::new(FakeTools::missing("cargo"));

    build_release(&sandbox)
        .args(["--version", "1.2.3", "--commit", "abc123"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("check for tools"))
        .stderr(predicate::str::contains("`cargo`"));
}

#[test]
fn unknown_flag_exits_one() {
    let sandbox = Sandbox::new(FakeTools::default());

    build_release(&sandbox)
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}
