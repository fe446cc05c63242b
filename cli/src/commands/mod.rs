//! # pidlink Commands
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level `pidlink` subcommands and the pieces
//! they share.
//!
//! - `list`: print every parent/child process pair
//! - `probe`: report the PowerShell version and the query dialect it selects
//!
//! Both commands resolve the PowerShell executable the same way: the
//! `--shell` flag (or `PIDLINK_SHELL`) wins over the configuration files.
//!
use crate::core::config;
use crate::core::error::Result;
use clap::Args;
use tracing::debug;

/// `pidlink list`: print parent/child process pairs.
pub mod list;
/// `pidlink probe`: report the detected PowerShell version.
pub mod probe;

/// Options shared by every command that runs PowerShell.
#[derive(Args, Debug, Clone, Default)]
pub struct ShellArgs {
    /// PowerShell executable to run (overrides the configuration files).
    #[arg(long, env = "PIDLINK_SHELL")]
    pub shell: Option<String>,
}

impl ShellArgs {
    /// Resolves the executable from the flag, then the configuration files.
    pub fn resolve_shell(&self) -> Result<String> {
        if let Some(shell) = self.shell.as_deref().filter(|s| !s.trim().is_empty()) {
            debug!("Using shell from command line: {}", shell);
            return Ok(shell.to_string());
        }
        let cfg = config::load_config()?;
        Ok(cfg.shell.executable)
    }
}
