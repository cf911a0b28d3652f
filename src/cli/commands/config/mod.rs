//! Configuration inspection commands.
mod schema;
mod show;

use std::sync::Arc;

pub use schema::SchemaCommand;
pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

const CATEGORY_NAME: &str = "config";

/// Registers the configuration commands under the "config" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context)));
}
