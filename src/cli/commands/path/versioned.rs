use std::sync::Arc;

use super::{CATEGORY_NAME, proto_path_arg, proto_path_from};
use crate::cli::{CliContext, Command, CommandResult, types::CommandMetadata};

/// Cuts a proto path back to its first versioned directory.
///
/// # Example Usage
///
/// ```bash
/// protopath path versioned google/cloud/aiplatform/v1/schema/predict
/// # google/cloud/aiplatform/v1
/// ```
pub struct VersionedCommand {
    context: Arc<CliContext>,
}

impl VersionedCommand {
    /// Creates a new VersionedCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for VersionedCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let proto_path = proto_path_from(args, "versioned")?;

        Ok(self.context.matcher.find_versioned_proto_path(proto_path))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "versioned".to_string(),
            description: "Truncate the path after its first version segment".to_string(),
            category: CATEGORY_NAME.to_string(),
            args: vec![proto_path_arg()],
            examples: vec![
                "protopath path versioned google/cloud/aiplatform/v1/schema/predict".to_string(),
            ],
        }
    }
}
