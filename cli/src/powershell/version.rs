//! # PowerShell Version Probe
//!
//! File: cli/src/powershell/version.rs
//! Author: Christi Mahu
//!
//! Asks the host PowerShell for `$PSVersionTable.PSVersion.Major`.
//!
use super::command_args;
use crate::common::process::{CommandRunner, RunOptions};
use crate::core::error::{PidlinkError, Result};
use tracing::debug;

const VERSION_SCRIPT: &str = "$PSVersionTable.PSVersion.Major";

/// Runs the version probe and returns the major version.
///
/// Only a spawn failure is an error. The exit code is not inspected: output
/// that does not start with a number yields version 0.
pub async fn probe_major_version(runner: &dyn CommandRunner, shell: &str) -> Result<i32> {
    let options = RunOptions {
        hide_window: true,
        verbatim_arguments: false,
    };
    let output = runner
        .run(shell, &command_args(VERSION_SCRIPT), options)
        .await
        .map_err(|source| PidlinkError::ProbeExecution { source })?;

    let text = String::from_utf8_lossy(&output.stdout);
    let major = parse_major_version(&text);
    debug!("PowerShell reported '{}', using major version {}", text.trim(), major);
    Ok(major)
}

/// Parses the leading base-10 digits of the trimmed probe output, 0 if there
/// are none or they overflow.
pub fn parse_major_version(text: &str) -> i32 {
    let trimmed = text.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().unwrap_or(0)
}
