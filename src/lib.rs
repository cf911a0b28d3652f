//! protopath - version handling for protocol-buffer source paths.
//!
//! Client-library generators address proto sources by slash-delimited
//! paths such as `google/cloud/aiplatform/v1`. This crate answers the
//! questions such tools keep asking about them:
//!
//! - Strip the trailing API version (`google/cloud/aiplatform`)
//! - Check whether a path ends in a version
//! - Cut a deep path back to its versioned directory
//!
//! # Quick Start
//!
//! ```rust
//! use protopath::proto_path::{ends_with_version, remove_version_from};
//!
//! assert_eq!(remove_version_from("google/cloud/aiplatform/v1"), "google/cloud/aiplatform");
//! assert!(ends_with_version("google/cloud/kms/v1beta1"));
//! ```

/// Configuration schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Proto path version handling.
pub mod proto_path;

/// Command-line interface.
pub mod cli;

/// Logging setup for the binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{ProtoPathError, Result};
pub use proto_path::{ProtoPath, VersionMatcher, remove_version_from};
