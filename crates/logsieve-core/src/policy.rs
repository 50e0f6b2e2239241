//! The console filtering policy.
//!
//! A [`FilterPolicy`] is resolved once from the host document, the optional
//! `--verbose` flag and the environment, and is immutable afterwards. Every
//! decision is a pure function of that state plus a fresh override lookup.
//!
//! Resolution order:
//!
//! 1. `verbose` is the explicit flag, or CI detection when no flag was given.
//! 2. Verbose raises the system default from `Warning` to `Information`.
//! 3. A configured `default` key replaces both the system and user defaults,
//!    including the verbose bump from step 2.

use std::sync::Arc;

use crate::category::is_system_category;
use crate::ci::{detect_ci, EnvProbe, ProcessEnv};
use crate::config::{lookup_level, HostConfig, DEFAULT_CATEGORY_KEY};
use crate::layer::ConsoleFilter;
use crate::level::SeverityLevel;

const SYSTEM_DEFAULT_LEVEL: SeverityLevel = SeverityLevel::Warning;
const USER_DEFAULT_LEVEL: SeverityLevel = SeverityLevel::Information;
const EFFECTIVE_DEFAULT_LEVEL: SeverityLevel = SeverityLevel::Information;

/// Decides which log records reach the console.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    config: Option<Arc<HostConfig>>,
    system_default_level: SeverityLevel,
    user_default_level: SeverityLevel,
    effective_default_level: SeverityLevel,
    verbose: bool,
    ci_detected: bool,
}

impl FilterPolicy {
    /// Resolve a policy against the process environment.
    pub fn new(config: Option<Arc<HostConfig>>, verbose: Option<bool>) -> Self {
        Self::with_probe(config, verbose, &ProcessEnv)
    }

    /// Resolve a policy, reading CI variables through `probe`.
    pub fn with_probe<P: EnvProbe + ?Sized>(
        config: Option<Arc<HostConfig>>,
        explicit_verbose: Option<bool>,
        probe: &P,
    ) -> Self {
        let ci = detect_ci(probe, explicit_verbose);
        let verbose = explicit_verbose.unwrap_or(false) || ci;
        // With an explicit flag `ci` just echoes it
        let ci_detected = explicit_verbose.is_none() && ci;

        let mut system_default_level = SYSTEM_DEFAULT_LEVEL;
        let mut user_default_level = USER_DEFAULT_LEVEL;

        if verbose {
            system_default_level = SeverityLevel::Information;
        }

        // A configured default wins over the verbose bump
        if let Some(level) = lookup_level(config.as_deref(), DEFAULT_CATEGORY_KEY) {
            system_default_level = level;
            user_default_level = level;
        }

        let policy = Self {
            config,
            system_default_level,
            user_default_level,
            effective_default_level: EFFECTIVE_DEFAULT_LEVEL,
            verbose,
            ci_detected,
        };
        policy.log_resolved();
        policy
    }

    /// Log the resolved state under the `Host.Config` category.
    ///
    /// Called on construction. A policy built before the subscriber that it
    /// filters is installed should call this again once logging is up.
    pub fn log_resolved(&self) {
        tracing::debug!(
            target: "Host.Config",
            verbose = self.verbose,
            ci_detected = self.ci_detected,
            system_default = %self.system_default_level,
            user_default = %self.user_default_level,
            effective_default = %self.effective_default_level,
            has_config = self.config.is_some(),
            "Resolved console filter policy"
        );
    }

    /// Replace the effective default level. `SeverityLevel::None` mutes every
    /// record that has no category override.
    pub fn with_effective_default_level(mut self, level: SeverityLevel) -> Self {
        self.effective_default_level = level;
        self
    }

    /// Default threshold for host runtime categories.
    pub fn system_default_level(&self) -> SeverityLevel {
        self.system_default_level
    }

    /// Default threshold for user code categories.
    pub fn user_default_level(&self) -> SeverityLevel {
        self.user_default_level
    }

    pub fn effective_default_level(&self) -> SeverityLevel {
        self.effective_default_level
    }

    /// Whether verbose output is on, explicitly or through CI detection.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether verbose mode came from CI detection rather than an explicit flag.
    pub fn ci_detected(&self) -> bool {
        self.ci_detected
    }

    pub fn config(&self) -> Option<&HostConfig> {
        self.config.as_deref()
    }

    /// Override configured for `category`.
    pub fn override_for(&self, category: &str) -> Option<SeverityLevel> {
        lookup_level(self.config(), category)
    }

    /// Provider-level gate, evaluated for every record before formatting.
    ///
    /// Host categories always pass here; their defaults are applied by
    /// [`is_enabled`](Self::is_enabled).
    pub fn should_emit(&self, category: &str, level: SeverityLevel) -> bool {
        if is_system_category(category) {
            return true;
        }
        match self.override_for(category) {
            Some(threshold) => level.passes(threshold),
            None => level.passes(self.user_default_level),
        }
    }

    /// Whether a record is enabled under overrides and the per-kind defaults.
    ///
    /// A category override replaces the defaults entirely, whatever the
    /// category kind.
    pub fn is_enabled(&self, category: &str, level: SeverityLevel) -> bool {
        if let Some(threshold) = self.override_for(category) {
            return level.passes(threshold);
        }
        if self.effective_default_level == SeverityLevel::None {
            return false;
        }

        let threshold = if is_system_category(category) {
            self.system_default_level
        } else {
            self.user_default_level
        };
        level.passes(threshold)
    }

    /// A `tracing-subscriber` filter backed by this policy.
    pub fn console_filter(&self) -> ConsoleFilter {
        ConsoleFilter::new(self.clone())
    }
}
