//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every audit setting can also
//! come from an `APP_AUDIT_*` environment variable.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::error::{AuditError, Result};
use crate::version::ComparisonMode;

/// Audit an installed application against a minimum-version policy.
///
/// Exits 0 when no action is needed (or the gating profile has not arrived
/// yet) and 1 when the application must be installed or upgraded.
#[derive(Debug, Parser)]
#[command(name = "app-audit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the system-wide config)
    #[arg(short, long, global = true, env = "APP_AUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Audit settings that override the config file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SettingsArgs {
    /// Exact application bundle name, e.g. "Cloudflare WARP.app"
    #[arg(long = "app", global = true, env = "APP_AUDIT_APP_NAME")]
    pub app_name: Option<String>,

    /// Minimum acceptable version; empty disables version enforcement
    #[arg(long, global = true, env = "APP_AUDIT_MINIMUM_VERSION")]
    pub minimum_version: Option<String>,

    /// Identifier prefix of the configuration profile that gates the audit
    #[arg(long, global = true, env = "APP_AUDIT_PROFILE_PREFIX")]
    pub profile_prefix: Option<String>,

    /// Directory searched for the application bundle
    #[arg(long, global = true, env = "APP_AUDIT_SEARCH_ROOT")]
    pub search_root: Option<PathBuf>,

    /// Directory levels searched below the search root
    #[arg(long, global = true, env = "APP_AUDIT_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Bundle metadata key holding the installed version
    #[arg(long, global = true, env = "APP_AUDIT_VERSION_KEY")]
    pub version_key: Option<String>,

    /// Command listing deployed profiles (shell-quoted)
    #[arg(long, global = true, env = "APP_AUDIT_PROFILES_COMMAND")]
    pub profiles_command: Option<String>,

    /// How installed and minimum versions are ordered
    #[arg(long, global = true, value_enum, env = "APP_AUDIT_COMPARISON")]
    pub comparison: Option<ComparisonMode>,
}

impl SettingsArgs {
    /// Convert flags into configuration overrides.
    pub fn to_overrides(&self) -> Result<ConfigOverrides> {
        let profiles_command = match &self.profiles_command {
            Some(line) => Some(shell_words::split(line).map_err(|e| {
                AuditError::ConfigValidationError {
                    message: format!("Cannot parse profiles command '{}': {}", line, e),
                }
            })?),
            None => None,
        };

        Ok(ConfigOverrides {
            app_name: self.app_name.clone(),
            minimum_version: self.minimum_version.clone(),
            profile_prefix: self.profile_prefix.clone(),
            search_root: self.search_root.clone(),
            max_depth: self.max_depth,
            version_key: self.version_key.clone(),
            profiles_command,
            comparison: self.comparison,
        })
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the audit (default if no command specified)
    Audit,

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
