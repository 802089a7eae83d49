mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn status_reports_without_creating_cursor() {
    let ctx = TestContext::new();
    ctx.add_dir_asset(1);

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor:    (not initialized)"))
        .stdout(predicate::str::contains("Next:      1"))
        .stdout(predicate::str::contains("Published: absent"));

    assert_eq!(ctx.read_cursor(), None);
}

#[test]
fn status_flags_upcoming_wrap() {
    let ctx = TestContext::new();
    ctx.add_dir_asset(1);
    ctx.add_dir_asset(2);
    ctx.write_cursor("2");

    ctx.cli()
        .arg("st")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next:      1 (restarts sequence)"));
}

#[test]
fn status_json_is_machine_readable() {
    let ctx = TestContext::new();
    ctx.add_file_asset(1);
    ctx.add_file_asset(2);
    ctx.write_cursor("1");

    let output = ctx.cli().args(["--mode", "file", "status", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "file");
    assert_eq!(report["cursor"], 1);
    assert_eq!(report["next"], 2);
    assert_eq!(report["wraps"], false);
    assert_eq!(report["published_exists"], false);
}

#[test]
fn reset_rewinds_cursor_and_keeps_current() {
    let ctx = TestContext::new();
    for index in 1..=3 {
        ctx.add_dir_asset(index);
    }
    ctx.cli().arg("rotate").assert().success();
    ctx.cli().arg("rotate").assert().success();

    ctx.cli()
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor reset from 2 to 0"));

    assert_eq!(ctx.read_cursor().as_deref(), Some("0"));
    ctx.assert_current_dir_is(2);

    ctx.cli().arg("rotate").assert().success();
    ctx.assert_current_dir_is(1);
}

#[test]
fn reset_repairs_corrupted_cursor() {
    let ctx = TestContext::new();
    ctx.add_dir_asset(1);
    ctx.add_dir_asset(2);
    ctx.write_cursor("not a number");

    ctx.cli()
        .args(["reset", "--to", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor set to 1"));

    ctx.cli().arg("rotate").assert().success();
    assert_eq!(ctx.read_cursor().as_deref(), Some("2"));
    ctx.assert_current_dir_is(2);
}
