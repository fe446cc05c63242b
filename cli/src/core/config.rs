//! # pidlink Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads the pidlink configuration, which currently decides one
//! thing: which PowerShell executable to run. It supports a multi-level
//! approach that combines defaults, user settings and project overrides.
//!
//! Configuration sources (in order of precedence):
//! 1. `--shell` / `PIDLINK_SHELL` (applied by the command handlers, not here)
//! 2. Project-specific `.pidlink.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [shell]
//! executable = "~/bin/pwsh"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let shell = cfg.shell.executable.as_str();
//! ```
//!
use crate::core::error::{PidlinkError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration used by the commands.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub shell: ShellConfig,
}

/// Which PowerShell to run for version probes and listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Program name or path, tilde-expanded.
    pub executable: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            executable: default_shell_executable(),
        }
    }
}

/// One configuration file as written on disk. Every setting is optional so
/// that a value set in a file, even one equal to the default, can be told
/// apart from a value left out.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    shell: ShellSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ShellSection {
    executable: Option<String>,
}

pub fn default_shell_executable() -> String {
    "powershell".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".pidlink.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config, project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "pidlink", "pidlink") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.pidlink.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.pidlink.toml`, stopping at the first
/// directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Resolves each setting from the project file, then the user file, then
/// the built-in default.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    Config {
        shell: ShellConfig {
            executable: project
                .shell
                .executable
                .or(user.shell.executable)
                .unwrap_or_else(default_shell_executable),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    config.shell.executable = shellexpand::tilde(&config.shell.executable).into_owned();
    debug!("Expanded shell executable: {}", config.shell.executable);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.shell.executable.trim().is_empty() {
        return Err(anyhow!(PidlinkError::Config(
            "Shell executable cannot be empty.".to_string()
        )));
    }
    Ok(())
}
