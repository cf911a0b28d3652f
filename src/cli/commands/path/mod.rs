//! Proto path commands.
mod check;
mod strip;
mod versioned;

use std::sync::Arc;

pub use check::CheckCommand;
pub use strip::StripCommand;
pub use versioned::VersionedCommand;

use crate::cli::{CliContext, CliError, CommandArg, CommandRegistry, types::ArgType};

const CATEGORY_NAME: &str = "path";

/// Registers the proto path commands under the "path" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    registry.register_command(CATEGORY_NAME, Box::new(StripCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(CheckCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(VersionedCommand::new(context)));
}

fn proto_path_arg() -> CommandArg {
    CommandArg {
        name: "proto_path".to_string(),
        description: "Slash-delimited proto path (e.g., google/cloud/aiplatform/v1)".to_string(),
        required: true,
        value_type: ArgType::ProtoPath,
    }
}

fn proto_path_from<'a>(args: &'a [String], command: &str) -> Result<&'a str, CliError> {
    args.first().map(String::as_str).ok_or_else(|| {
        CliError::InvalidArguments(format!(
            "Expected <proto_path> argument for '{command}' command"
        ))
    })
}
