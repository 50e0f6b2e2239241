//! Error types for logsieve.
//!
//! The filtering predicates themselves never fail. Errors only come from
//! loading a host configuration document or from parsing user-supplied
//! level tokens.

use std::path::PathBuf;
use thiserror::Error;

/// Host configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON host document
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a TOML host document
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document root is not a mapping
    #[error("Config root must be an object, found a scalar value")]
    NotASection,
}

/// A token that does not name a severity level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown log level '{0}' (expected Trace, Debug, Information, Warning, Error, Critical or None)")]
pub struct ParseLevelError(pub String);
