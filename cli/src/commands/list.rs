//! # pidlink List Command Handler
//!
//! File: cli/src/commands/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `pidlink list`, which queries PowerShell for every running
//! process and prints one `PPID PID` row per process, in the order PowerShell
//! reported them.
//!
//! ## Usage
//!
//! ```bash
//! pidlink list
//! pidlink list --shell pwsh
//! ```
//!
use super::ShellArgs;
use crate::common::process::TokioCommandRunner;
use crate::core::error::Result;
use crate::powershell::{self, ProcessLink};
use clap::Parser;
use std::io::{self, Write};

/// Arguments for the 'list' subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub shell: ShellArgs,
}

/// Handler function for the 'list' subcommand.
pub async fn handle_list(args: ListArgs) -> Result<()> {
    tracing::info!("Handling list command...");
    let shell = args.shell.resolve_shell()?;
    let links = powershell::list_process_links(&TokioCommandRunner, &shell).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, &links)?;
    Ok(())
}

/// Writes the header and one right-aligned row per link.
fn write_table(out: &mut impl Write, links: &[ProcessLink]) -> io::Result<()> {
    writeln!(out, "{:>8} {:>8}", "PPID", "PID")?;
    for link in links {
        writeln!(out, "{:>8} {:>8}", link.parent_id, link.id)?;
    }
    out.flush()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_parsing() {
        let args = ListArgs::try_parse_from(["list", "--shell", "pwsh"]).unwrap();
        assert_eq!(args.shell.shell.as_deref(), Some("pwsh"));
    }

    #[test]
    fn test_write_table() {
        let mut buf = Vec::new();
        write_table(
            &mut buf,
            &[ProcessLink::new(0, 777), ProcessLink::new(777, 778)],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "    PPID      PID\n       0      777\n     777      778\n"
        );
    }
}
