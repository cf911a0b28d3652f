//! Configuration schema definitions and validation.
//!
//! The configuration file is optional. It controls log verbosity and lets
//! users replace the version grammar for projects whose API versions do not
//! follow the `v1beta1` convention.

mod general;
mod loading;
mod paths;
mod versioning;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use versioning::VersioningConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for protopath.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Version segment recognition.
    #[serde(default)]
    pub versioning: VersioningConfig,
}
