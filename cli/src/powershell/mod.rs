//! # pidlink PowerShell Process Links (`powershell`)
//!
//! File: cli/src/powershell/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module discovers the parent/child relationships of every process on
//! the host by asking PowerShell for `Win32_Process` data. A query runs in two
//! steps:
//!
//! 1. **Probe** (`version`): ask PowerShell for its major version.
//! 2. **List** (`listing`): run the query dialect suited to that version and
//!    parse its header-less two-column table (`parser`) into `ProcessLink`s.
//!
//! ## Architecture
//!
//! - `dialect`: the closed set of listing queries and the version rule choosing between them
//! - `version`: the version probe and its lenient parser
//! - `parser`: text-to-`ProcessLink` conversion, skipping lines it cannot use
//! - `listing`: the full probe, select, run, check and parse sequence
//!
//! All process spawning goes through `common::process::CommandRunner`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::TokioCommandRunner;
//! use crate::powershell;
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let links = powershell::list_process_links(&TokioCommandRunner, "powershell").await?;
//! for link in &links {
//!     println!("{} -> {}", link.parent_id, link.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
pub mod dialect;
pub mod listing;
pub mod parser;
pub mod version;

pub use dialect::Dialect;
pub use listing::list_process_links;
pub use version::probe_major_version;

/// Leading PowerShell arguments shared by every query: skip the user profile
/// and never prompt.
pub(crate) const BASE_ARGS: [&str; 3] = ["-NoProfile", "-NonInteractive", "-Command"];

/// One process and the process that spawned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessLink {
    pub parent_id: u32,
    pub id: u32,
}

impl ProcessLink {
    pub fn new(parent_id: u32, id: u32) -> Self {
        Self { parent_id, id }
    }
}

/// Builds the full argument vector for running `script` through PowerShell.
pub(crate) fn command_args(script: &str) -> Vec<&str> {
    let mut args = BASE_ARGS.to_vec();
    args.push(script);
    args
}
