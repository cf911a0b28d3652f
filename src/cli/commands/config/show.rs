use std::sync::Arc;

use super::CATEGORY_NAME;
use crate::cli::{CliContext, CliError, Command, CommandResult, types::CommandMetadata};

/// Prints the effective configuration as TOML.
pub struct ShowCommand {
    context: Arc<CliContext>,
}

impl ShowCommand {
    /// Creates a new ShowCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for ShowCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let rendered = toml::to_string(&self.context.config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(format!(
            "{}\n# effective version pattern: {}",
            rendered.trim_end(),
            self.context.config.versioning.effective_pattern()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the effective configuration".to_string(),
            category: CATEGORY_NAME.to_string(),
            args: vec![],
            examples: vec!["protopath --config ./protopath.toml config show".to_string()],
        }
    }
}
