use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    ProtoPathError, Result,
    proto_path::{DEFAULT_VERSION_PATTERN, VersionMatcher},
};

/// Settings for recognizing version segments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct VersioningConfig {
    /// Regular expression a whole segment must match to count as a version.
    ///
    /// Anchoring is implicit. When unset, `v[1-9][0-9]*[a-z0-9]*` is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl VersioningConfig {
    /// The pattern in effect, falling back to the default grammar.
    pub fn effective_pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_VERSION_PATTERN)
    }

    /// Builds the matcher described by this configuration.
    ///
    /// # Errors
    /// Returns `ProtoPathError::ConfigValidation` if the configured pattern
    /// does not compile.
    pub fn matcher(&self) -> Result<VersionMatcher> {
        match &self.pattern {
            None => Ok(VersionMatcher::default()),
            Some(pattern) => {
                VersionMatcher::new(pattern).map_err(|e| ProtoPathError::ConfigValidation {
                    component: "versioning.pattern".to_string(),
                    details: e.to_string(),
                })
            }
        }
    }
}
