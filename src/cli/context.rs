use crate::{Result, config::Config, proto_path::VersionMatcher};

/// Shared state handed to every command.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// The effective configuration.
    pub config: Config,

    /// Version grammar built from `config.versioning`.
    pub matcher: VersionMatcher,
}

impl CliContext {
    /// Builds the context, compiling the configured version grammar.
    ///
    /// # Errors
    /// Returns an error if `versioning.pattern` is not a valid regex.
    pub fn new(config: Config) -> Result<Self> {
        let matcher = config.versioning.matcher()?;

        Ok(Self { config, matcher })
    }
}
