//! # pidlink CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a
//! separate test crate that runs the compiled `pidlink` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get pidlink Command (`pidlink_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `pidlink` binary with
/// `PIDLINK_SHELL` and `RUST_LOG` cleared, so the host environment cannot
/// change which shell is run or what gets logged.
///
/// ## Panics
/// Panics if the `pidlink` binary cannot be found via `Command::cargo_bin`.
pub fn pidlink_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pidlink").expect("Failed to find pidlink binary for testing");
    cmd.env_remove("PIDLINK_SHELL").env_remove("RUST_LOG");
    cmd
}

/// # Write Fake Shell (`write_fake_shell`)
///
/// Writes an executable `/bin/sh` script named `name` into `dir` that stands
/// in for PowerShell. The script sees the same arguments PowerShell would
/// (`-NoProfile -NonInteractive -Command <script>`), so `$4` is the script.
#[cfg(unix)]
pub fn write_fake_shell(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fake shell");
    let mut perms = std::fs::metadata(&path).expect("stat fake shell").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod fake shell");
    path
}
