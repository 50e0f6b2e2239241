//! Host configuration documents.
//!
//! A host document (usually `host.json`) is loaded once into a
//! [`ConfigNode`] tree and shared read-only with the filtering policy.
//! JSON and TOML documents are supported.

mod overrides;
mod tree;

pub use overrides::{configured_overrides, lookup_level, DEFAULT_CATEGORY_KEY, LOG_LEVEL_SECTION};
pub use tree::ConfigNode;

use crate::error::ConfigError;
use std::path::Path;

/// A parsed host configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    root: ConfigNode,
}

impl HostConfig {
    /// Wrap an existing tree. The root must be a section.
    pub fn new(root: ConfigNode) -> Result<Self, ConfigError> {
        match root {
            ConfigNode::Section(_) => Ok(Self { root }),
            ConfigNode::Value(_) => Err(ConfigError::NotASection),
        }
    }

    /// Load a document from disk.
    ///
    /// `.toml` files are parsed as TOML; everything else as JSON.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        tracing::debug!(target: "Host.Config", "Loaded host config from {}", path.display());
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::new(value.into())
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(content)?;
        Self::new(value.into())
    }

    /// Root of the document.
    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    /// Node at `path`, matching keys case-insensitively.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&ConfigNode> {
        self.root.get(path)
    }
}
