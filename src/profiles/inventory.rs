//! Deployed configuration profile inventory.
//!
//! On macOS the installed profiles are listed by `/usr/bin/profiles -C -v`,
//! which prints one `attribute: profileIdentifier: <id>` line per profile.
//! The inventory only reads; it never installs or removes profiles.

use std::process::Command;

use crate::error::{AuditError, Result};

/// Marker that precedes an identifier in the profile listing.
const IDENTIFIER_MARKER: &str = "profileIdentifier:";

/// Source of deployed profile identifiers.
pub trait ProfileInventory {
    /// List the identifiers of every deployed profile.
    fn identifiers(&self) -> Result<Vec<String>>;
}

/// Queries the operating system by running the profile listing command.
#[derive(Debug, Clone)]
pub struct SystemProfiles {
    command: Vec<String>,
}

impl SystemProfiles {
    /// Create an inventory backed by the given argv.
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    /// The command line, joined for display.
    pub fn display_command(&self) -> String {
        shell_words::join(&self.command)
    }
}

impl ProfileInventory for SystemProfiles {
    fn identifiers(&self) -> Result<Vec<String>> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(AuditError::ProfileQueryFailed {
                command: String::new(),
                message: "empty command".to_string(),
            });
        };

        tracing::debug!("Querying profiles with: {}", self.display_command());

        let output = Command::new(program).args(args).output().map_err(|e| {
            AuditError::ProfileQueryFailed {
                command: self.display_command(),
                message: e.to_string(),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AuditError::ProfileQueryFailed {
                command: self.display_command(),
                message: format!(
                    "exited with code {:?}: {}",
                    output.status.code(),
                    stderr.trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_identifiers(&stdout))
    }
}

/// A fixed identifier list.
#[derive(Debug, Clone, Default)]
pub struct StaticProfiles {
    identifiers: Vec<String>,
}

impl StaticProfiles {
    /// Create an inventory holding exactly these identifiers.
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProfileInventory for StaticProfiles {
    fn identifiers(&self) -> Result<Vec<String>> {
        Ok(self.identifiers.clone())
    }
}

/// Extract profile identifiers from profile listing output.
///
/// Lines without the `profileIdentifier:` marker are ignored.
pub fn parse_identifiers(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let idx = line.find(IDENTIFIER_MARKER)?;
            let id = line[idx + IDENTIFIER_MARKER.len()..].trim();
            if id.is_empty() {
                None
            } else {
                Some(id.to_string())
            }
        })
        .collect()
}
