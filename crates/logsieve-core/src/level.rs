//! Severity levels shared by every filtering decision.
//!
//! Levels are ordered from most verbose to most silent. A record "passes" a
//! threshold when its level is at least as severe as the threshold, so
//! `SeverityLevel::None` as a threshold suppresses everything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Ordered log importance, from `Trace` (most verbose) to `None` (silent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
    /// Not a record level; as a threshold it suppresses all output.
    None,
}

impl SeverityLevel {
    /// Every level in ascending order.
    pub const ALL: [SeverityLevel; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::None,
    ];

    /// Canonical name, as written in host configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
            Self::None => "None",
        }
    }

    /// Whether a record at this level passes `threshold`.
    pub fn passes(self, threshold: SeverityLevel) -> bool {
        self >= threshold
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseLevelError;

    /// Parse a level name (case-insensitive) or its ordinal `0..=6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if let Ok(ordinal) = token.parse::<usize>() {
            return Self::ALL
                .get(ordinal)
                .copied()
                .ok_or_else(|| ParseLevelError(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl From<tracing::Level> for SeverityLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Information,
            tracing::Level::WARN => Self::Warning,
            tracing::Level::ERROR => Self::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order_matches_declaration() {
        for (i, a) in SeverityLevel::ALL.iter().enumerate() {
            for (j, b) in SeverityLevel::ALL.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_none_is_most_silent() {
        assert_eq!(SeverityLevel::ALL.iter().max(), Some(&SeverityLevel::None));
        assert!(!SeverityLevel::Critical.passes(SeverityLevel::None));
        assert!(SeverityLevel::None.passes(SeverityLevel::None));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("debug".parse::<SeverityLevel>().unwrap(), SeverityLevel::Debug);
        assert_eq!("WARNING".parse::<SeverityLevel>().unwrap(), SeverityLevel::Warning);
        assert_eq!(" Information ".parse::<SeverityLevel>().unwrap(), SeverityLevel::Information);
        assert_eq!("none".parse::<SeverityLevel>().unwrap(), SeverityLevel::None);
    }

    #[test]
    fn test_parse_ordinals() {
        assert_eq!("0".parse::<SeverityLevel>().unwrap(), SeverityLevel::Trace);
        assert_eq!("4".parse::<SeverityLevel>().unwrap(), SeverityLevel::Error);
        assert_eq!("6".parse::<SeverityLevel>().unwrap(), SeverityLevel::None);
        assert!("7".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert!("info".parse::<SeverityLevel>().is_err());
        assert!("".parse::<SeverityLevel>().is_err());
        assert!("-1".parse::<SeverityLevel>().is_err());

        let err = "loud".parse::<SeverityLevel>().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in SeverityLevel::ALL {
            assert_eq!(level.to_string().parse::<SeverityLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        assert_eq!(
            serde_json::to_string(&SeverityLevel::Information).unwrap(),
            "\"Information\""
        );
        for level in SeverityLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
            assert_eq!(serde_json::from_str::<SeverityLevel>(&json).unwrap(), level);
        }
        assert!(serde_json::from_str::<SeverityLevel>("\"Loud\"").is_err());
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(SeverityLevel::from(tracing::Level::INFO), SeverityLevel::Information);
        assert_eq!(SeverityLevel::from(tracing::Level::WARN), SeverityLevel::Warning);
        assert_eq!(SeverityLevel::from(tracing::Level::ERROR), SeverityLevel::Error);
    }
}
