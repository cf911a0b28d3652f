//! Version handling for protocol-buffer source paths.
//!
//! Proto paths such as `google/cloud/aiplatform/v1` name a directory of
//! `.proto` files. Client-library generation often needs the same path with
//! its API version removed, or cut back to the versioned directory.

mod path;
mod version;

#[cfg(test)]
mod tests;

pub use path::ProtoPath;
pub use version::{DEFAULT_VERSION_PATTERN, VersionMatcher};

/// Removes the trailing version segment from a proto path.
///
/// Stacked versions are stripped until the last segment is no longer a
/// version, so `google/v1/v2` becomes `google` rather than `google/v1`.
///
/// ```
/// use protopath::proto_path::remove_version_from;
///
/// assert_eq!(remove_version_from("google/cloud/aiplatform/v1"), "google/cloud/aiplatform");
/// assert_eq!(remove_version_from("google/cloud/aiplatform"), "google/cloud/aiplatform");
/// ```
pub fn remove_version_from(proto_path: &str) -> String {
    VersionMatcher::default_matcher().remove_version_from(proto_path)
}

/// Whether the last segment of a proto path is a version.
pub fn ends_with_version(proto_path: &str) -> bool {
    VersionMatcher::default_matcher().ends_with_version(proto_path)
}

/// Truncates a proto path right after its first version segment.
///
/// ```
/// use protopath::proto_path::find_versioned_proto_path;
///
/// assert_eq!(
///     find_versioned_proto_path("google/cloud/aiplatform/v1/schema/predict"),
///     "google/cloud/aiplatform/v1"
/// );
/// ```
pub fn find_versioned_proto_path(proto_path: &str) -> String {
    VersionMatcher::default_matcher().find_versioned_proto_path(proto_path)
}
