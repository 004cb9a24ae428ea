//! Config command implementation.
//!
//! The `app-audit config` command shows the resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::LoadedConfig;
use crate::error::{AuditError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    loaded: LoadedConfig,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(loaded: LoadedConfig, args: ConfigArgs) -> Self {
        Self { loaded, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(&self.loaded.config)
                .map_err(|e| AuditError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        match &self.loaded.source {
            Some(path) => {
                ui.message(&format!("# {}", path.display()));
                ui.message("");
            }
            None => ui.warning("No configuration file found; showing defaults and overrides"),
        }

        let yaml =
            serde_yaml::to_string(&self.loaded.config).map_err(|e| AuditError::Other(e.into()))?;
        ui.message(&yaml);

        Ok(CommandResult::success())
    }
}
