//! Command handlers and shared host config loading.

pub mod check;
pub mod levels;

use anyhow::Context;
use logsieve_core::HostConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Host document looked up in the working directory when `--config` is absent.
pub const DEFAULT_HOST_FILE: &str = "host.json";

/// A loaded host document and where it came from.
#[derive(Debug, Clone)]
pub struct HostSource {
    pub path: PathBuf,
    pub config: Arc<HostConfig>,
}

/// Load the host document for this run.
///
/// A path given explicitly must load. The default `host.json` is optional,
/// and a broken one only produces a warning.
pub fn load_host_config(explicit: Option<&str>) -> anyhow::Result<Option<HostSource>> {
    resolve_host_config(explicit, Path::new(DEFAULT_HOST_FILE))
}

fn resolve_host_config(
    explicit: Option<&str>,
    default_path: &Path,
) -> anyhow::Result<Option<HostSource>> {
    if let Some(raw) = explicit {
        let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
        let config = HostConfig::load_from(&path)
            .with_context(|| format!("Cannot load host config {}", path.display()))?;
        return Ok(Some(HostSource {
            path,
            config: Arc::new(config),
        }));
    }

    if !default_path.exists() {
        return Ok(None);
    }

    // Logging isn't initialized yet, so warn on stderr directly
    match HostConfig::load_from(default_path) {
        Ok(config) => Ok(Some(HostSource {
            path: default_path.to_path_buf(),
            config: Arc::new(config),
        })),
        Err(e) => {
            eprintln!(
                "Warning: Failed to load {}: {e}\n  \
                 Continuing without host configuration.",
                default_path.display()
            );
            Ok(None)
        }
    }
}
