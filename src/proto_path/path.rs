use std::{convert::Infallible, fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::VersionMatcher;

/// A slash-delimited identifier naming a protocol-buffer source directory.
///
/// Any string is accepted; no separator normalization takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ProtoPath(String);

impl ProtoPath {
    /// Wraps a path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the `/`-separated segments, left to right.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The final segment, which is the whole path when it has no separator.
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(self.0.as_str())
    }

    /// Whether the path ends in a version segment under the default grammar.
    pub fn ends_with_version(&self) -> bool {
        VersionMatcher::default_matcher().ends_with_version(&self.0)
    }

    /// The path with trailing version segments removed, using the default grammar.
    pub fn without_version(&self) -> ProtoPath {
        self.without_version_using(VersionMatcher::default_matcher())
    }

    /// Same as [`ProtoPath::without_version`] with a caller-supplied grammar.
    pub fn without_version_using(&self, matcher: &VersionMatcher) -> ProtoPath {
        ProtoPath(matcher.remove_version_from(&self.0))
    }

    /// The path truncated after its first version segment, using the default grammar.
    pub fn versioned_prefix(&self) -> ProtoPath {
        ProtoPath(VersionMatcher::default_matcher().find_versioned_proto_path(&self.0))
    }

    /// Unwraps into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProtoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProtoPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for ProtoPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ProtoPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for ProtoPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
