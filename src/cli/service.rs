use std::sync::Arc;

use super::{CliError, CommandRegistry, context::CliContext};

const HELP_CATEGORY: &str = "help";

/// High-level service for managing and executing CLI commands.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    pub fn new(context: CliContext) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(context));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// The `help` category prints the command overview, or detailed help
    /// for `help <category> <command>`.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Returns `CliError::InvalidArguments` if the argument count is wrong.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == HELP_CATEGORY {
            return match (command_name, args.first()) {
                ("", _) => Ok(self.registry.help_text()),
                (help_category, Some(help_command)) => {
                    self.registry.command_help(help_category, help_command)
                }
                (help_category, None) => Err(CliError::InvalidArguments(format!(
                    "Expected 'help {help_category} <command>'"
                ))),
            };
        }

        self.registry.execute(category, command_name, args)
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }
}
