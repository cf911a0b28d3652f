use std::fmt;

use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when the argument count does not match the command's
    /// metadata, or a value has the wrong shape.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the configuration system.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A general service error occurred.
    #[error("Service error: {0}")]
    ServiceError(String),
}

/// Type alias for command execution results.
///
/// Success carries the text to print on stdout.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "proto_path").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    /// A slash-delimited proto path.
    ProtoPath,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgType::ProtoPath => write!(f, "proto path"),
        }
    }
}

/// Complete metadata for a CLI command.
///
/// The registry uses this for help generation and argument count
/// validation, so it is the authoritative definition of the command's
/// interface.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "strip", "schema").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "path", "config").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// [`Command::metadata`] before this is called.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
