use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for protopath.
///
/// Path transformations themselves never fail; these cover building a
/// custom version grammar and loading the configuration file.
#[derive(Error, Debug)]
pub enum ProtoPathError {
    /// A custom version pattern is not a valid regular expression
    #[error("invalid version pattern '{pattern}': {details}")]
    InvalidVersionPattern {
        /// The pattern as supplied by the user
        pattern: String,
        /// Regex compilation error details
        details: String,
    },

    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for protopath operations.
pub type Result<T> = std::result::Result<T, ProtoPathError>;

impl ProtoPathError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ProtoPathError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        ProtoPathError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
