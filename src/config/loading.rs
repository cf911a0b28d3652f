use std::{fs, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{ProtoPathError, Result};

impl Config {
    /// Loads the configuration from its default location.
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but is unreadable or invalid.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()
            .map_err(|e| ProtoPathError::io(e, Path::new("$XDG_CONFIG_HOME")))?;

        Self::load_or_default(&path)
    }

    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Same as [`Config::load_from`], except for a missing file.
    #[instrument]
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(path)
    }

    /// Loads the configuration from an explicitly chosen file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The TOML content is invalid
    /// - `versioning.pattern` is not a valid regular expression
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| ProtoPathError::io(e, path))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ProtoPathError::toml_parse(e, Some(path)))?;
        config.validate()?;

        debug!(pattern = config.versioning.effective_pattern(), "Loaded config");
        Ok(config)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| ProtoPathError::toml_parse(e, None))?;
        config.validate()?;

        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    /// Returns `ProtoPathError::ConfigValidation` for an invalid version pattern.
    pub fn validate(&self) -> Result<()> {
        self.versioning.matcher().map(|_| ())
    }
}
