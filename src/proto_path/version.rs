use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::{ProtoPathError, Result};

/// Version grammar used when no custom pattern is configured.
///
/// A `v`, a major version without a leading zero, then an optional
/// lowercase qualifier such as `beta1` or `p1beta1`.
pub const DEFAULT_VERSION_PATTERN: &str = "v[1-9][0-9]*[a-z0-9]*";

const SEPARATOR: char = '/';

static DEFAULT_MATCHER: OnceLock<VersionMatcher> = OnceLock::new();

/// Recognizes version segments in proto paths.
///
/// The pattern always applies to a whole segment, so `v1` matches but
/// `foo_v1` and `v1-beta` do not under the default grammar.
#[derive(Debug, Clone)]
pub struct VersionMatcher {
    regex: Regex,
}

impl VersionMatcher {
    /// Compiles a matcher from a custom version pattern.
    ///
    /// The pattern is anchored to the whole segment before compiling, callers
    /// should not add `^` or `$` themselves.
    ///
    /// # Errors
    /// Returns `ProtoPathError::InvalidVersionPattern` if the pattern is not a
    /// valid regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
            ProtoPathError::InvalidVersionPattern {
                pattern: pattern.to_string(),
                details: e.to_string(),
            }
        })?;

        debug!(pattern, "compiled version matcher");
        Ok(Self { regex })
    }

    /// Returns the shared matcher for [`DEFAULT_VERSION_PATTERN`].
    ///
    /// # Panics
    /// Panics if [`DEFAULT_VERSION_PATTERN`] fails to compile, which the unit
    /// tests rule out.
    #[allow(clippy::expect_used)]
    pub fn default_matcher() -> &'static VersionMatcher {
        DEFAULT_MATCHER.get_or_init(|| {
            VersionMatcher::new(DEFAULT_VERSION_PATTERN)
                .expect("default version pattern is a valid regex")
        })
    }

    /// Whether `segment` on its own is a version marker.
    ///
    /// The empty segment is never a version, whatever the pattern.
    pub fn is_version(&self, segment: &str) -> bool {
        !segment.is_empty() && self.regex.is_match(segment)
    }

    /// Strips trailing version segments from `path`.
    ///
    /// Stacked versions are all removed so the result never ends in a
    /// version. A path made only of a version becomes empty. A trailing `/`
    /// leaves an empty last segment, which is not a version.
    pub fn remove_version_from(&self, path: &str) -> String {
        let mut remaining = path;

        loop {
            match remaining.rsplit_once(SEPARATOR) {
                Some((parent, last)) if self.is_version(last) => remaining = parent,
                None if self.is_version(remaining) => return String::new(),
                _ => return remaining.to_string(),
            }
        }
    }

    /// Whether the last segment of `path` is a version marker.
    pub fn ends_with_version(&self, path: &str) -> bool {
        let last = path.rsplit(SEPARATOR).next().unwrap_or(path);
        self.is_version(last)
    }

    /// Truncates `path` right after its first version segment.
    ///
    /// Returns `path` unchanged when no segment is a version.
    pub fn find_versioned_proto_path(&self, path: &str) -> String {
        let mut end = 0;

        for segment in path.split(SEPARATOR) {
            end += segment.len();
            if self.is_version(segment) {
                return path[..end].to_string();
            }
            end += SEPARATOR.len_utf8();
        }

        path.to_string()
    }
}

impl Default for VersionMatcher {
    fn default() -> Self {
        Self::default_matcher().clone()
    }
}
