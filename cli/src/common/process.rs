//! # pidlink Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module wraps the execution of external programs behind the
//! `CommandRunner` trait. The PowerShell query code only ever talks to this
//! trait, so tests can substitute a scripted runner while the binary uses
//! `TokioCommandRunner`, which spawns real child processes through
//! `tokio::process::Command`.
//!
//! ## Contract
//!
//! `run(program, args, options)` resolves to:
//! - `Err(io::Error)` when the program could not be spawned or awaited
//! - `Ok(CommandOutput)` with the captured stdout bytes and the exit code otherwise
//!
//! A child terminated without an exit code (for instance by a signal) reports
//! `-1`. Stderr is captured but not returned.
//!
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use tracing::debug;

/// Execution options understood by a `CommandRunner`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Suppress any console window for the child (Windows only).
    pub hide_window: bool,
    /// Pass arguments to the child without the runner's own quoting (Windows only).
    pub verbatim_arguments: bool,
}

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes a named program with arguments and captures its output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str], options: RunOptions)
        -> io::Result<CommandOutput>;
}

/// `CommandRunner` backed by `tokio::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        options: RunOptions,
    ) -> io::Result<CommandOutput> {
        debug!("Running '{}' with args {:?} ({:?})", program, args, options);

        let mut command = tokio::process::Command::new(program);
        apply_arguments(&mut command, args, options);

        #[cfg(windows)]
        if options.hide_window {
            command.creation_flags(CREATE_NO_WINDOW);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        let output = command.output().await?;
        let exit_code = output.status.code().unwrap_or(-1);

        debug!(
            "'{}' exited with code {} ({} bytes of stdout, stderr='{}')",
            program,
            exit_code,
            output.stdout.len(),
            String::from_utf8_lossy(&output.stderr).trim()
        );

        Ok(CommandOutput {
            stdout: output.stdout,
            exit_code,
        })
    }
}

#[cfg(windows)]
fn apply_arguments(command: &mut tokio::process::Command, args: &[&str], options: RunOptions) {
    if options.verbatim_arguments {
        for arg in args {
            command.raw_arg(arg);
        }
    } else {
        command.args(args);
    }
}

// Arguments are handed to the child as a vector on Unix, so there is no
// quoting layer to bypass.
#[cfg(not(windows))]
fn apply_arguments(command: &mut tokio::process::Command, args: &[&str], _options: RunOptions) {
    command.args(args);
}
