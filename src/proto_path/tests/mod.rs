//! Unit tests for proto path version handling
//!
//! Pure string transforms, no filesystem access.

#![allow(clippy::unwrap_used, clippy::panic)]

use crate::ProtoPathError;
use crate::proto_path::{
    ProtoPath, VersionMatcher, ends_with_version, find_versioned_proto_path, remove_version_from,
};

#[test]
fn remove_version_from_returns_non_versioned_path() {
    assert_eq!(
        remove_version_from("google/cloud/aiplatform/v1"),
        "google/cloud/aiplatform"
    );
}

#[test]
fn remove_version_from_returns_self() {
    assert_eq!(
        remove_version_from("google/cloud/aiplatform"),
        "google/cloud/aiplatform"
    );
}

#[test]
fn remove_version_from_strips_qualified_versions() {
    assert_eq!(
        remove_version_from("google/cloud/aiplatform/v1p1beta1"),
        "google/cloud/aiplatform"
    );
    assert_eq!(remove_version_from("google/cloud/kms/v1beta1"), "google/cloud/kms");
    assert_eq!(remove_version_from("google/maps/routing/v2alpha"), "google/maps/routing");
    assert_eq!(remove_version_from("google/ads/googleads/v17"), "google/ads/googleads");
}

#[test]
fn remove_version_from_bare_version_is_empty() {
    assert_eq!(remove_version_from("v1"), "");
}

#[test]
fn remove_version_from_empty_is_empty() {
    assert_eq!(remove_version_from(""), "");
}

#[test]
fn remove_version_from_keeps_trailing_separator() {
    assert_eq!(remove_version_from("google/cloud/v1/"), "google/cloud/v1/");
}

#[test]
fn remove_version_from_ignores_version_lookalikes() {
    for path in [
        "google/cloud/vision",
        "google/cloud/video",
        "google/cloud/v0",
        "google/cloud/V1",
        "google/cloud/v1-beta",
        "google/cloud/v",
        "google/cloud/foo_v1",
    ] {
        assert_eq!(remove_version_from(path), path, "{path} should be unchanged");
    }
}

#[test]
fn remove_version_from_only_looks_at_the_end() {
    assert_eq!(
        remove_version_from("google/cloud/aiplatform/v1/schema"),
        "google/cloud/aiplatform/v1/schema"
    );
}

#[test]
fn remove_version_from_strips_stacked_versions() {
    assert_eq!(remove_version_from("google/v1/v2"), "google");
    assert_eq!(remove_version_from("v1/v2"), "");
}

#[test]
fn remove_version_from_is_idempotent() {
    for path in [
        "google/cloud/aiplatform/v1",
        "google/cloud/aiplatform",
        "google/v1/v2",
        "v1",
        "",
        "a//v1",
        "google/cloud/v1/",
    ] {
        let once = remove_version_from(path);
        assert_eq!(remove_version_from(&once), once, "not idempotent for {path}");
        assert!(!ends_with_version(&once));
    }
}

#[test]
fn ends_with_version_agrees_with_remove() {
    for path in [
        "google/cloud/aiplatform/v1",
        "google/cloud/aiplatform",
        "google/cloud/v1/",
        "v1",
        "",
        "google/cloud/aiplatform/v1/schema",
    ] {
        assert_eq!(
            ends_with_version(path),
            remove_version_from(path) != path,
            "mismatch for {path}"
        );
    }
}

#[test]
fn find_versioned_proto_path_truncates_after_version() {
    assert_eq!(
        find_versioned_proto_path("google/cloud/aiplatform/v1/schema/predict/instance"),
        "google/cloud/aiplatform/v1"
    );
    assert_eq!(
        find_versioned_proto_path("google/cloud/aiplatform/v1beta1"),
        "google/cloud/aiplatform/v1beta1"
    );
}

#[test]
fn find_versioned_proto_path_uses_first_version() {
    assert_eq!(find_versioned_proto_path("google/v1/foo/v2/bar"), "google/v1");
    assert_eq!(find_versioned_proto_path("v1/foo"), "v1");
}

#[test]
fn find_versioned_proto_path_without_version_returns_self() {
    assert_eq!(
        find_versioned_proto_path("google/cloud/vision/common"),
        "google/cloud/vision/common"
    );
    assert_eq!(find_versioned_proto_path(""), "");
}

#[test]
fn custom_matcher_is_anchored() {
    let matcher = VersionMatcher::new("v[0-9]+").unwrap();

    assert!(matcher.is_version("v0"));
    assert!(matcher.is_version("v10"));
    assert!(!matcher.is_version("v1beta1"));
    assert!(!matcher.is_version("foov1"));
    assert_eq!(matcher.remove_version_from("google/type/v0"), "google/type");
    assert_eq!(
        matcher.remove_version_from("google/type/v1beta1"),
        "google/type/v1beta1"
    );
}

#[test]
fn custom_matcher_rejects_invalid_regex() {
    let err = VersionMatcher::new("v[0-9").unwrap_err();

    match err {
        ProtoPathError::InvalidVersionPattern { pattern, .. } => assert_eq!(pattern, "v[0-9"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn default_matcher_grammar() {
    let matcher = VersionMatcher::default();

    for segment in ["v1", "v12", "v1beta1", "v1p1beta1", "v2alpha", "v1main"] {
        assert!(matcher.is_version(segment), "{segment} should be a version");
    }
    for segment in ["", "v", "v0", "v01", "V1", "vision", "version", "v1-beta", "v1.2"] {
        assert!(!matcher.is_version(segment), "{segment} should not be a version");
    }
}

#[test]
fn proto_path_segments() {
    let path = ProtoPath::new("google/cloud/aiplatform/v1");

    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        ["google", "cloud", "aiplatform", "v1"]
    );
    assert_eq!(path.last_segment(), "v1");
    assert_eq!(ProtoPath::new("v1").last_segment(), "v1");
}

#[test]
fn proto_path_operations() {
    let path: ProtoPath = "google/cloud/aiplatform/v1/schema".parse().unwrap();

    assert!(!path.ends_with_version());
    assert_eq!(path.without_version(), path);
    assert_eq!(path.versioned_prefix().as_str(), "google/cloud/aiplatform/v1");
    assert!(path.versioned_prefix().ends_with_version());
    assert_eq!(
        path.versioned_prefix().without_version().to_string(),
        "google/cloud/aiplatform"
    );
}

#[test]
fn proto_path_serializes_as_plain_string() {
    let path = ProtoPath::from("google/cloud/aiplatform/v1");

    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, "\"google/cloud/aiplatform/v1\"");

    let back: ProtoPath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}

#[test]
fn empty_segment_is_never_a_version() {
    let matcher = VersionMatcher::new("v?[0-9]*").unwrap();

    assert!(!matcher.is_version(""));
    assert!(matcher.is_version("v2"));
    assert!(matcher.is_version("7"));

    for path in ["", "a/", "google/cloud/v1/", "a//v1", "google/v1/3"] {
        let stripped = matcher.remove_version_from(path);

        assert_eq!(
            matcher.ends_with_version(path),
            stripped != path,
            "mismatch for {path:?}"
        );
        assert!(!matcher.ends_with_version(&stripped), "{stripped:?} still versioned");
    }
    assert_eq!(matcher.remove_version_from("a/"), "a/");
    assert_eq!(matcher.find_versioned_proto_path("a//v1"), "a//v1");
}
