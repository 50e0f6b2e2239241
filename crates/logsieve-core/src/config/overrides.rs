//! Per-category log level overrides.
//!
//! Overrides live in the `logging.logLevel` section of the host document:
//!
//! ```json
//! { "logging": { "logLevel": { "default": "Warning", "Function.MyFunc": "Debug" } } }
//! ```
//!
//! A category name is one key inside that section. Dots are part of the key;
//! a `:` splits the name into nested sections. Missing keys and values that
//! do not parse as a level both resolve to "no override".

use super::{ConfigNode, HostConfig};
use crate::level::SeverityLevel;

/// Path of the log level section, relative to the document root.
pub const LOG_LEVEL_SECTION: [&str; 2] = ["logging", "logLevel"];

/// Reserved key holding the blanket default for every category.
pub const DEFAULT_CATEGORY_KEY: &str = "default";

const PATH_SEPARATOR: char = ':';

/// Override configured for `category`, if any.
///
/// Returns `None` when there is no document, when the key is absent, or when
/// the stored value is not a valid level.
pub fn lookup_level(config: Option<&HostConfig>, category: &str) -> Option<SeverityLevel> {
    if category.is_empty() {
        return None;
    }

    let section = config?.get(&LOG_LEVEL_SECTION)?;
    let node = category
        .split(PATH_SEPARATOR)
        .try_fold(section, |node, segment| node.child(segment))?;

    node.as_value()?.parse().ok()
}

/// Every valid override in the log level section, in key order.
///
/// Nested sections are flattened back into `:`-joined category names.
/// Entries with invalid values are skipped.
pub fn configured_overrides(config: Option<&HostConfig>) -> Vec<(String, SeverityLevel)> {
    let Some(section) = config.and_then(|c| c.get(&LOG_LEVEL_SECTION)) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    collect(section, None, &mut out);
    out
}

fn collect(node: &ConfigNode, prefix: Option<&str>, out: &mut Vec<(String, SeverityLevel)>) {
    let Some(children) = node.as_section() else {
        return;
    };

    for (key, child) in children {
        let name = match prefix {
            Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{key}"),
            None => key.clone(),
        };
        match child {
            ConfigNode::Value(value) => {
                if let Ok(level) = value.parse::<SeverityLevel>() {
                    out.push((name, level));
                }
            }
            ConfigNode::Section(_) => collect(child, Some(&name), out),
        }
    }
}
