//! # pidlink Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout pidlink. Every failure
//! of a process-link query is terminal for that query and reaches the caller
//! as exactly one of the variants below.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PidlinkError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - Version probe execution failures
//! - Listing command execution failures and non-zero exit codes
//! - Output that cannot be interpreted at all
//! - Configuration errors
//!
//! ## Examples
//!
//! Categorizing a failed query:
//!
//! ```rust
//! match powershell::list_process_links(&runner, "powershell").await {
//!     Ok(links) => println!("{} links", links.len()),
//!     Err(e) if matches!(
//!         e.downcast_ref::<PidlinkError>(),
//!         Some(PidlinkError::ListingExitCode { .. })
//!     ) => {
//!         println!("PowerShell refused the query: {}", e);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for pidlink.
#[derive(Error, Debug)]
pub enum PidlinkError {
    #[error("Failed to run PowerShell version probe: {source}")]
    ProbeExecution {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run PowerShell listing command: {source}")]
    ListingExecution {
        #[source]
        source: std::io::Error,
    },

    #[error("PowerShell listing command exited with code {code}")]
    ListingExitCode { code: i32 },

    #[error("Failed to parse PowerShell output: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
