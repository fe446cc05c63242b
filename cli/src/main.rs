//! # pidlink Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the pidlink CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Print every parent/child process pair
//! pidlink list
//!
//! # Show which PowerShell version and query dialect would be used
//! pidlink -v probe --shell pwsh
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (list, probe)
mod common; // Shared utilities (process execution)
mod core; // Core infrastructure (errors, config)
mod powershell; // Version probe, dialects and output parsing

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "pidlink",
    about = "Discover parent/child process ids through the host PowerShell",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// List parent/child pairs of all running processes
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
    /// Report the PowerShell major version and the listing dialect it selects
    Probe(commands::probe::ProbeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::List(args) => commands::list::handle_list(args).await,
        Commands::Probe(args) => commands::probe::handle_probe(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
