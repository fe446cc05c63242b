//! # pidlink CLI List/Probe Integration Tests
//!
//! File: cli/tests/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs `pidlink list` and `pidlink probe` against fake PowerShell scripts
//! (Unix only) to check the whole query end to end: version probe, dialect
//! choice, exit code handling and table parsing.
//!
//! All scenarios share one test function. Writing an executable while another
//! test thread forks can fail with "Text file busy", so the scripts are all
//! written before anything is spawned.
//!
#![cfg(unix)]

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

const MODERN_SHELL: &str = r#"case "$4" in
  '$PSVersionTable.PSVersion.Major') printf '5\n' ;;
  Get-CimInstance*) printf '\n      0       777\n    777       778\n\n    invalid line\n      0       779\n\n' ;;
  *) exit 9 ;;
esac"#;

const LEGACY_SHELL: &str = r#"case "$4" in
  '$PSVersionTable.PSVersion.Major') printf '2\n' ;;
  Get-WmiObject*) printf '  4  100\n' ;;
  *) exit 9 ;;
esac"#;

const FAILING_SHELL: &str = r#"case "$4" in
  '$PSVersionTable.PSVersion.Major') printf '5\n' ;;
  *) exit 1 ;;
esac"#;

#[test]
fn test_list_and_probe_with_fake_shells() {
    let dir = tempdir().unwrap();
    let modern = write_fake_shell(dir.path(), "modern-pwsh", MODERN_SHELL);
    let legacy = write_fake_shell(dir.path(), "legacy-pwsh", LEGACY_SHELL);
    let failing = write_fake_shell(dir.path(), "failing-pwsh", FAILING_SHELL);
    let config_dir = dir.path().join("project");
    std::fs::create_dir_all(config_dir.join(".git")).unwrap();
    std::fs::write(
        config_dir.join(".pidlink.toml"),
        format!("[shell]\nexecutable = \"{}\"\n", legacy.display()),
    )
    .unwrap();

    // Modern shell: CIM query, invalid and blank lines dropped.
    pidlink_cmd()
        .arg("list")
        .arg("--shell")
        .arg(&modern)
        .assert()
        .success()
        .stdout(predicate::eq(
            "    PPID      PID\n       0      777\n     777      778\n       0      779\n",
        ));

    // PIDLINK_SHELL is honored like --shell.
    pidlink_cmd()
        .arg("list")
        .env("PIDLINK_SHELL", &modern)
        .assert()
        .success()
        .stdout(predicate::str::contains("     777      778"));

    // Legacy shell picked up from the project config file: WMI query.
    pidlink_cmd()
        .arg("list")
        .current_dir(&config_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("       4      100"));

    // Non-zero listing exit code is reported with the code.
    pidlink_cmd()
        .arg("list")
        .arg("--shell")
        .arg(&failing)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "PowerShell listing command exited with code 1",
        ));

    pidlink_cmd()
        .arg("probe")
        .arg("--shell")
        .arg(&modern)
        .assert()
        .success()
        .stdout(predicate::str::contains("PowerShell major version 5 (dialect: cim)"));

    pidlink_cmd()
        .arg("probe")
        .arg("--shell")
        .arg(&legacy)
        .assert()
        .success()
        .stdout(predicate::str::contains("PowerShell major version 2 (dialect: wmi)"));
}
