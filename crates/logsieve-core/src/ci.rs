//! Detection of automated build / CI environments.
//!
//! Running under CI raises the default visibility of host output, unless the
//! user passed an explicit verbose flag. The environment is read through
//! [`EnvProbe`] so detection can be exercised with a fake environment.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Environment variables that mark a CI run.
///
/// `CI` covers Travis CI, CircleCI, Cirrus CI, GitLab CI, AppVeyor, CodeShip and dsari;
/// `CONTINUOUS_INTEGRATION` and `BUILD_NUMBER` cover Travis CI and Cirrus CI;
/// `RUN_ID` covers TaskCluster and dsari.
pub const CI_ENV_VARS: [&str; 4] = ["CI", "CONTINUOUS_INTEGRATION", "BUILD_NUMBER", "RUN_ID"];

/// Read access to environment variables.
pub trait EnvProbe {
    /// Value of `name`, or `None` if it is unset or unreadable.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProbe for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values count as unset
        std::env::var(name).ok()
    }
}

impl<F> EnvProbe for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// A fixed set of variables.
impl<S: BuildHasher> EnvProbe for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Whether the process runs inside a CI system.
///
/// An explicit verbose flag (even `false`) is returned as-is and the
/// environment is not consulted.
pub fn detect_ci<P: EnvProbe + ?Sized>(probe: &P, explicit_verbose: Option<bool>) -> bool {
    if let Some(verbose) = explicit_verbose {
        return verbose;
    }

    CI_ENV_VARS
        .iter()
        .any(|name| probe.var(name).is_some_and(|value| !value.is_empty()))
}
