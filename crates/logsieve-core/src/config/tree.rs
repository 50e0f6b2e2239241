//! Format-independent configuration tree.
//!
//! A node is either a scalar string or an ordered section of named children.
//! Lookups walk path segments and compare keys case-insensitively.

use std::collections::BTreeMap;

/// A node in a host configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNode {
    /// Scalar value, stringified regardless of its source type
    Value(String),
    /// Named children
    Section(BTreeMap<String, ConfigNode>),
}

impl ConfigNode {
    /// Child of a section whose key equals `key`, ignoring ASCII case.
    ///
    /// An exact match is preferred; otherwise the first case-insensitive
    /// match in key order is returned.
    pub fn child(&self, key: &str) -> Option<&ConfigNode> {
        let Self::Section(children) = self else {
            return None;
        };

        children.get(key).or_else(|| {
            children
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(key))
                .map(|(_, node)| node)
        })
    }

    /// Walk `path` from this node.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&ConfigNode> {
        path.iter()
            .try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    /// Scalar value of this node, if it is one.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Section(_) => None,
        }
    }

    /// Children of this node, if it is a section.
    pub fn as_section(&self) -> Option<&BTreeMap<String, ConfigNode>> {
        match self {
            Self::Section(children) => Some(children),
            Self::Value(_) => None,
        }
    }
}

fn indexed<I: IntoIterator<Item = ConfigNode>>(items: I) -> ConfigNode {
    ConfigNode::Section(
        items
            .into_iter()
            .enumerate()
            .map(|(i, node)| (i.to_string(), node))
            .collect(),
    )
}

impl From<serde_json::Value> for ConfigNode {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Object(map) => Self::Section(
                map.into_iter()
                    .map(|(key, value)| (key, ConfigNode::from(value)))
                    .collect(),
            ),
            Value::Array(items) => indexed(items.into_iter().map(ConfigNode::from)),
            Value::String(s) => Self::Value(s),
            Value::Null => Self::Value(String::new()),
            other => Self::Value(other.to_string()),
        }
    }
}

impl From<toml::Value> for ConfigNode {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::Table(table) => Self::Section(
                table
                    .into_iter()
                    .map(|(key, value)| (key, ConfigNode::from(value)))
                    .collect(),
            ),
            Value::Array(items) => indexed(items.into_iter().map(ConfigNode::from)),
            Value::String(s) => Self::Value(s),
            Value::Integer(i) => Self::Value(i.to_string()),
            Value::Float(f) => Self::Value(f.to_string()),
            Value::Boolean(b) => Self::Value(b.to_string()),
            Value::Datetime(dt) => Self::Value(dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigNode {
        ConfigNode::from(json!({
            "logging": {
                "logLevel": {
                    "default": "Warning",
                    "Function.MyFunc": "Debug"
                }
            },
            "version": 2.0,
            "extensions": ["http", "queues"],
            "watchDirectories": null
        }))
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let root = sample();
        let node = root.get(&["LOGGING", "loglevel", "DEFAULT"]).unwrap();
        assert_eq!(node.as_value(), Some("Warning"));
    }

    #[test]
    fn test_dotted_keys_are_single_segments() {
        let root = sample();
        let node = root.get(&["logging", "logLevel", "function.myfunc"]).unwrap();
        assert_eq!(node.as_value(), Some("Debug"));
        assert!(root.get(&["logging", "logLevel", "Function"]).is_none());
    }

    #[test]
    fn test_scalars_are_stringified() {
        let root = sample();
        assert_eq!(root.get(&["version"]).and_then(ConfigNode::as_value), Some("2.0"));
        assert_eq!(root.get(&["watchDirectories"]).and_then(ConfigNode::as_value), Some(""));
    }

    #[test]
    fn test_arrays_become_indexed_sections() {
        let root = sample();
        assert_eq!(root.get(&["extensions", "1"]).and_then(ConfigNode::as_value), Some("queues"));
    }

    #[test]
    fn test_walking_through_a_scalar_fails() {
        let root = sample();
        assert!(root.get(&["version", "major"]).is_none());
        assert!(root.child("version").unwrap().as_section().is_none());
    }

    #[test]
    fn test_exact_key_preferred_over_case_insensitive_match() {
        let root = ConfigNode::from(json!({ "Default": "Error", "default": "Debug" }));
        assert_eq!(root.get(&["default"]).and_then(ConfigNode::as_value), Some("Debug"));
        assert_eq!(root.get(&["Default"]).and_then(ConfigNode::as_value), Some("Error"));
        // Neither matches exactly: first in key order
        assert_eq!(root.get(&["DEFAULT"]).and_then(ConfigNode::as_value), Some("Error"));
    }

    #[test]
    fn test_from_toml() {
        let value: toml::Value = toml::from_str(
            r#"
            [logging.logLevel]
            default = "Error"
            "Host.Results" = 3
            "#,
        )
        .unwrap();
        let root = ConfigNode::from(value);
        assert_eq!(
            root.get(&["logging", "logLevel", "host.results"]).and_then(ConfigNode::as_value),
            Some("3")
        );
    }
}
