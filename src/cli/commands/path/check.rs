use std::sync::Arc;

use super::{CATEGORY_NAME, proto_path_arg, proto_path_from};
use crate::cli::{CliContext, Command, CommandResult, types::CommandMetadata};

/// Reports whether a proto path ends in a version segment.
pub struct CheckCommand {
    context: Arc<CliContext>,
}

impl CheckCommand {
    /// Creates a new CheckCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for CheckCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let proto_path = proto_path_from(args, "check")?;

        Ok(self.context.matcher.ends_with_version(proto_path).to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "check".to_string(),
            description: "Print whether the path ends with a version".to_string(),
            category: CATEGORY_NAME.to_string(),
            args: vec![proto_path_arg()],
            examples: vec!["protopath path check google/cloud/aiplatform/v1".to_string()],
        }
    }
}
