//! logsieve core - console log visibility for a function host CLI.
//!
//! Decides, for every log record identified by a category and a severity
//! level, whether it is printed to the console. The decision blends:
//!
//! - whether the category belongs to the host runtime or to user code,
//! - per-category overrides from the host document's `logging.logLevel` section,
//! - verbose mode, set explicitly or inferred from a CI environment.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logsieve_core::{FilterPolicy, HostConfig, SeverityLevel};
//!
//! let config = HostConfig::load_from("host.json".as_ref())?;
//! let policy = FilterPolicy::new(Some(Arc::new(config)), None);
//!
//! if policy.should_emit("Function.Run.User", SeverityLevel::Debug) {
//!     // format and print the record
//! }
//! ```

pub mod category;
pub mod ci;
pub mod config;
pub mod error;
pub mod layer;
pub mod level;
pub mod policy;

// Re-exports for convenient access
pub use category::{is_system_category, CategoryKind};
pub use ci::{detect_ci, EnvProbe, ProcessEnv, CI_ENV_VARS};
pub use config::{lookup_level, ConfigNode, HostConfig};
pub use error::{ConfigError, ParseLevelError};
pub use layer::ConsoleFilter;
pub use level::SeverityLevel;
pub use policy::FilterPolicy;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
