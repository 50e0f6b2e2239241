//! Console filter for `tracing-subscriber`.
//!
//! The event target is the category. A record reaches the console layer only
//! if it passes the provider gate ([`FilterPolicy::should_emit`]) and then the
//! console logger gate ([`FilterPolicy::is_enabled`]).

use tracing::subscriber::Interest;
use tracing::Metadata;
use tracing_subscriber::layer::{Context, Filter};

use crate::level::SeverityLevel;
use crate::policy::FilterPolicy;

/// Per-layer filter backed by a [`FilterPolicy`].
#[derive(Debug, Clone)]
pub struct ConsoleFilter {
    policy: FilterPolicy,
}

impl ConsoleFilter {
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Whether a record from `category` at `level` is printed.
    pub fn allows(&self, category: &str, level: SeverityLevel) -> bool {
        self.policy.should_emit(category, level) && self.policy.is_enabled(category, level)
    }
}

impl<S> Filter<S> for ConsoleFilter {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.allows(meta.target(), SeverityLevel::from(*meta.level()))
    }

    // Several subscribers with different policies may share a callsite
    fn callsite_enabled(&self, _meta: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }
}
