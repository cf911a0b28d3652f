use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use super::{
    CliError, Command,
    commands::{config, path},
    context::CliContext,
    formatting::{format_category, format_command, format_description, format_header},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── path
/// │   ├── check
/// │   ├── strip
/// │   └── versioned
/// └── config
///     ├── schema
///     └── show
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    context: Arc<CliContext>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self {
            categories: HashMap::new(),
            context,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category. A
    /// command registered under an existing name replaces the old one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// within it doesn't exist, and `CliError::InvalidArguments` if the
    /// argument count doesn't fit the command's metadata. Other errors come
    /// from the command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in category '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        debug!(category, command = command_name, ?args, "Executing command");
        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Renders help text for every registered command.
    pub fn help_text(&self) -> String {
        let mut lines = vec![
            format_header("Usage: protopath [--config <FILE>] <category> <command> [args...]"),
            format_description("Run 'protopath help <category> <command>' for details"),
            String::new(),
        ];

        for (category, commands) in self.list_commands() {
            lines.push(format_category(&category));

            for name in commands {
                let Some(metadata) = self
                    .categories
                    .get(&category)
                    .and_then(|commands| commands.get(&name))
                    .map(|command| command.metadata())
                else {
                    continue;
                };

                let args: String = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.required {
                            format!(" <{}>", arg.name)
                        } else {
                            format!(" [{}]", arg.name)
                        }
                    })
                    .collect();

                lines.push(format!(
                    "  {}{}  {}",
                    format_command(&metadata.name),
                    args,
                    format_description(&metadata.description)
                ));
            }

            lines.push(String::new());
        }

        lines.join("\n").trim_end().to_string()
    }

    /// Renders detailed help for one command: its arguments and examples.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command isn't registered.
    pub fn command_help(&self, category: &str, command_name: &str) -> Result<String, CliError> {
        let metadata = self
            .categories
            .get(category)
            .and_then(|commands| commands.get(command_name))
            .map(|command| command.metadata())
            .ok_or_else(|| {
                CliError::CommandNotFound(format!(
                    "Failed to find command '{command_name}' in category '{category}'"
                ))
            })?;

        let mut lines = vec![
            format_header(&format!(
                "protopath {} {}",
                metadata.category, metadata.name
            )),
            format_description(&metadata.description),
        ];

        if !metadata.args.is_empty() {
            lines.push(String::new());
            lines.push(format_category("Arguments"));
            for arg in &metadata.args {
                let requirement = if arg.required { "required" } else { "optional" };
                lines.push(format!(
                    "  {} ({}, {})  {}",
                    format_command(&arg.name),
                    arg.value_type,
                    requirement,
                    format_description(&arg.description)
                ));
            }
        }

        if !metadata.examples.is_empty() {
            lines.push(String::new());
            lines.push(format_category("Examples"));
            lines.extend(metadata.examples.iter().map(|example| format!("  {example}")));
        }

        Ok(lines.join("\n"))
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let context = Arc::clone(&self.context);

        path::register_commands(self, context.clone());
        config::register_commands(self, context);
    }
}
