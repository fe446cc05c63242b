//! # pidlink Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the PowerShell query code and the commands.
//!
//! - **`process`**: Running external programs behind the `CommandRunner` trait.
//!

/// Utilities for executing external processes and capturing their output.
pub mod process;
