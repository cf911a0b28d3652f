//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::unwrap_used, clippy::panic)]

use crate::ProtoPathError;
use crate::config::{Config, LogLevel, VersioningConfig};
use crate::proto_path::DEFAULT_VERSION_PATTERN;

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.versioning.pattern, None);
    assert_eq!(config.versioning.effective_pattern(), DEFAULT_VERSION_PATTERN);
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("log_level = \"warn\""));
    assert!(!toml_str.contains("pattern"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [versioning]
        pattern = "v[0-9]+"
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.versioning.pattern.as_deref(), Some("v[0-9]+"));
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config {
        versioning: VersioningConfig {
            pattern: Some("v[0-9]+".to_string()),
        },
        ..Config::default()
    };

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized = Config::from_toml_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_rejects_unknown_log_level() {
    let err = Config::from_toml_str("[general]\nlog_level = \"loud\"\n").unwrap_err();

    assert!(matches!(err, ProtoPathError::TomlParseError { .. }));
}

#[test]
fn config_rejects_invalid_pattern() {
    let err = Config::from_toml_str("[versioning]\npattern = \"v[0-9\"\n").unwrap_err();

    match err {
        ProtoPathError::ConfigValidation { component, .. } => {
            assert_eq!(component, "versioning.pattern")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn versioning_config_builds_custom_matcher() {
    let versioning = VersioningConfig {
        pattern: Some("v[0-9]+".to_string()),
    };

    let matcher = versioning.matcher().unwrap();
    assert!(matcher.is_version("v0"));
    assert!(!matcher.is_version("v1beta1"));
}

#[test]
fn versioning_config_defaults_to_builtin_grammar() {
    let matcher = VersioningConfig::default().matcher().unwrap();

    assert!(matcher.is_version("v1p1beta1"));
    assert!(!matcher.is_version("v0"));
}

#[test]
fn log_level_display() {
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Info.to_string(), "info");
    assert_eq!(LogLevel::Debug.to_string(), "debug");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
