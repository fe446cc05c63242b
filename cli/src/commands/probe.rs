//! # pidlink Probe Command Handler
//!
//! File: cli/src/commands/probe.rs
//! Author: Christi Mahu
//!
//! Implements `pidlink probe`: runs only the version probe and reports the
//! listing dialect `pidlink list` would use. Handy when a listing fails and
//! you want to know which query was attempted.
//!
use super::ShellArgs;
use crate::common::process::TokioCommandRunner;
use crate::core::error::Result;
use crate::powershell::{self, Dialect};
use clap::Parser;

/// Arguments for the 'probe' subcommand.
#[derive(Parser, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub shell: ShellArgs,
}

/// Handler function for the 'probe' subcommand.
pub async fn handle_probe(args: ProbeArgs) -> Result<()> {
    tracing::info!("Handling probe command...");
    let shell = args.shell.resolve_shell()?;
    let major = powershell::probe_major_version(&TokioCommandRunner, &shell).await?;
    println!("{}", describe(&shell, major));
    Ok(())
}

fn describe(shell: &str, major: i32) -> String {
    let dialect = Dialect::for_version(major);
    format!(
        "{}: PowerShell major version {} (dialect: {})",
        shell, major, dialect
    )
}
