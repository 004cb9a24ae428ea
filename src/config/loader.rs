//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Configuration file (`--config <path>`, or the system-wide file when present)
//! 3. Environment variables and command-line flags

use crate::config::schema::{AuditConfig, ConfigOverrides};
use crate::config::validator::validate;
use crate::error::{AuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// System-wide configuration file, typically deployed by the device-management agent.
pub const SYSTEM_CONFIG_PATH: &str = "/Library/Application Support/app-audit/config.yml";

/// A resolved configuration and where its file layer came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The final, validated configuration.
    pub config: AuditConfig,
    /// The configuration file that was read, if any.
    pub source: Option<PathBuf>,
}

/// Pick the configuration file to read.
///
/// An explicit path is always returned, even if it does not exist, so that
/// loading reports it as missing. Otherwise `fallback` is used when present.
pub fn discover_config_path(explicit: Option<&Path>, fallback: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if fallback.is_file() {
        Some(fallback.to_path_buf())
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<AuditConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`AuditConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<AuditConfig> {
    if content.trim().is_empty() {
        return Ok(AuditConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build the final configuration from the file layer and overrides.
pub fn resolve_config(
    explicit: Option<&Path>,
    fallback: &Path,
    overrides: &ConfigOverrides,
) -> Result<LoadedConfig> {
    let source = discover_config_path(explicit, fallback);

    let mut config = match &source {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            load_config_file(path)?
        }
        None => AuditConfig::default(),
    };

    config.apply(overrides);
    validate(&config)?;

    Ok(LoadedConfig { config, source })
}

/// Build the final configuration, falling back to [`SYSTEM_CONFIG_PATH`].
pub fn load_config(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<LoadedConfig> {
    resolve_config(explicit, Path::new(SYSTEM_CONFIG_PATH), overrides)
}
