//! # PowerShell Table Parser
//!
//! File: cli/src/powershell/parser.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Converts the output of `Format-Table -HideTableHeaders` into
//! `ProcessLink`s. The table looks like this (right-aligned columns, blank
//! lines around it, and on Windows a stray `\r` before each line ending):
//!
//! ```text
//!
//!       0       777
//!     777       778
//!
//! ```
//!
//! Parsing is best effort per line: a line is used only if its first two
//! whitespace-separated tokens are both base-10 integers, and is skipped
//! silently otherwise. Extra columns are ignored. Only output that is not
//! text at all (invalid UTF-8) fails the whole parse.
//!
use super::ProcessLink;
use crate::core::error::{PidlinkError, Result};
use tracing::debug;

/// Line terminator used by the host platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Parses raw listing output using the host line terminator.
pub fn parse_process_links(stdout: &[u8]) -> Result<Vec<ProcessLink>> {
    parse_process_links_with(stdout, LINE_ENDING)
}

/// Parses raw listing output, splitting lines on `line_ending`.
pub fn parse_process_links_with(stdout: &[u8], line_ending: &str) -> Result<Vec<ProcessLink>> {
    let text = std::str::from_utf8(stdout)
        .map_err(|e| PidlinkError::Parse(format!("output is not valid UTF-8: {}", e)))?;

    let mut links = Vec::new();
    let mut skipped = 0usize;
    for line in text.split(line_ending) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(link) => links.push(link),
            None => {
                debug!("Skipping unparseable line: '{}'", line);
                skipped += 1;
            }
        }
    }

    debug!("Parsed {} process links ({} lines skipped)", links.len(), skipped);
    Ok(links)
}

/// Parses one trimmed, non-empty line as `<parent id> <id> [ignored...]`.
fn parse_line(line: &str) -> Option<ProcessLink> {
    let mut tokens = line.split_whitespace();
    let parent_id = tokens.next()?.parse().ok()?;
    let id = tokens.next()?.parse().ok()?;
    Some(ProcessLink::new(parent_id, id))
}
