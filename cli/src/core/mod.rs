//! # pidlink Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate `Result` alias
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{PidlinkError, Result};
//! ```
//!
pub mod config;
pub mod error;
