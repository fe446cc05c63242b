//! # PowerShell Process Listing
//!
//! File: cli/src/powershell/listing.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs the complete query: probe the PowerShell version, pick the dialect,
//! run its listing query and parse the table. The first failure ends the
//! query; no partial list is ever returned.
//!
//! ## Error Flow
//!
//! 1. Probe cannot be spawned → `PidlinkError::ProbeExecution` (listing never runs)
//! 2. Listing cannot be spawned → `PidlinkError::ListingExecution`
//! 3. Listing exits non-zero → `PidlinkError::ListingExitCode`
//! 4. Listing output is not text → `PidlinkError::Parse`
//!
use super::{command_args, parser, version, Dialect, ProcessLink};
use crate::common::process::{CommandRunner, RunOptions};
use crate::core::error::{PidlinkError, Result};
use tracing::{debug, info};

/// Queries the parent/child pairs of every running process through `shell`.
pub async fn list_process_links(
    runner: &dyn CommandRunner,
    shell: &str,
) -> Result<Vec<ProcessLink>> {
    let major = version::probe_major_version(runner, shell).await?;
    let dialect = Dialect::for_version(major);
    info!(
        "Using {} dialect for PowerShell major version {}",
        dialect, major
    );
    run_listing(runner, shell, dialect).await
}

/// Runs one dialect's listing query and parses its output.
pub async fn run_listing(
    runner: &dyn CommandRunner,
    shell: &str,
    dialect: Dialect,
) -> Result<Vec<ProcessLink>> {
    // The query contains spaces and pipes that must reach PowerShell unquoted.
    let options = RunOptions {
        hide_window: true,
        verbatim_arguments: true,
    };
    let output = runner
        .run(shell, &command_args(dialect.query()), options)
        .await
        .map_err(|source| PidlinkError::ListingExecution { source })?;

    if !output.success() {
        return Err(PidlinkError::ListingExitCode {
            code: output.exit_code,
        }
        .into());
    }

    debug!("Listing produced {} bytes", output.stdout.len());
    parser::parse_process_links(&output.stdout)
}
