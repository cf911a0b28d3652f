//! Command-line interface for proto path operations.
//!
//! Commands are organized by category and automatically generate help text
//! from their metadata.

mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
mod types;


pub use commands::{
    config::{SchemaCommand, ShowCommand},
    path::{CheckCommand, StripCommand, VersionedCommand},
};
pub use context::CliContext;
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
