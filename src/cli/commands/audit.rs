//! Audit command implementation.
//!
//! The `app-audit audit` command (also the default) runs the precondition
//! gate, bundle search, and version policy against the live system.

use crate::audit::Auditor;
use crate::config::LoadedConfig;
use crate::detection::InfoPlist;
use crate::error::Result;
use crate::profiles::SystemProfiles;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The audit command implementation.
pub struct AuditCommand {
    loaded: LoadedConfig,
}

impl AuditCommand {
    /// Create a new audit command.
    pub fn new(loaded: LoadedConfig) -> Self {
        Self { loaded }
    }
}

impl Command for AuditCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = &self.loaded.config;
        if let Some(source) = &self.loaded.source {
            tracing::debug!("Using configuration from {}", source.display());
        }

        let inventory = SystemProfiles::new(config.profiles_command.clone());
        let metadata = InfoPlist::default();
        let report = Auditor::new(config, &inventory, &metadata).run();

        if report.verdict.needs_remediation() {
            Ok(CommandResult::failure(report.exit_code()))
        } else {
            Ok(CommandResult::success())
        }
    }
}
