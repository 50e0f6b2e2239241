//! Logging initialization.
//!
//! The console layer is filtered by the resolved [`FilterPolicy`] instead of
//! an `EnvFilter`, so the tool prints exactly what the host would print.

use logsieve_core::FilterPolicy;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*};

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `policy` - Console filtering policy; event targets are the categories.
/// * `json_format` - If true, outputs structured JSON logs; otherwise pretty-printed.
///
/// Log output goes to stderr (stdout is reserved for command output).
pub fn init(policy: &FilterPolicy, json_format: bool) {
    if json_format {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(policy.console_filter()),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_filter(policy.console_filter()),
            )
            .init();
    }
}

/// Log how the host document was loaded and the policy it resolved to.
///
/// Both happen before [`init`], so their events are replayed here under the
/// `Host.Config` category once the filtered subscriber is installed.
pub fn report_startup(policy: &FilterPolicy, config_path: Option<&Path>) {
    match config_path {
        Some(path) => {
            tracing::debug!(target: "Host.Config", "Loaded host config from {}", path.display())
        }
        None => tracing::debug!(target: "Host.Config", "No host config, using defaults"),
    }
    policy.log_resolved();
}
