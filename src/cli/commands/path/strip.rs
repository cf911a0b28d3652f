use std::sync::Arc;

use tracing::debug;

use super::{CATEGORY_NAME, proto_path_arg, proto_path_from};
use crate::cli::{CliContext, Command, CommandResult, types::CommandMetadata};

/// Removes the trailing version segment from a proto path.
///
/// # Example Usage
///
/// ```bash
/// protopath path strip google/cloud/aiplatform/v1
/// ```
pub struct StripCommand {
    context: Arc<CliContext>,
}

impl StripCommand {
    /// Creates a new StripCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for StripCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let proto_path = proto_path_from(args, "strip")?;
        let stripped = self.context.matcher.remove_version_from(proto_path);

        debug!(proto_path, %stripped, "Stripped version");
        Ok(stripped)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "strip".to_string(),
            description: "Remove the trailing version segment".to_string(),
            category: CATEGORY_NAME.to_string(),
            args: vec![proto_path_arg()],
            examples: vec![
                "protopath path strip google/cloud/aiplatform/v1".to_string(),
                "protopath path strip google/cloud/kms/v1beta1".to_string(),
            ],
        }
    }
}
