//! Python environment classification and reporting.
//!
//! Classifies a Python installation prefix into one of a fixed set of
//! categories (system, venv, conda root, conda env), collects installed
//! versions of the watched Jupyter packages, and determines the default
//! kernel name. The result is emitted as a single JSON line.
//!
//! Everything here works from an installation prefix on the filesystem;
//! no Python interpreter is ever executed.

pub mod classify;
pub mod kernels;
pub mod packages;

pub use classify::{classify_prefix, resolve_prefix, Classification, EnvironmentType};
pub use kernels::{default_kernel_name, DEFAULT_KERNEL};
pub use packages::{package_versions, VERSION_SENTINEL, WATCHED_PACKAGES};

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Flat result record describing an environment.
///
/// Serialized with the wire keys the desktop app consumes:
/// `type`, `name`, `versions`, `defaultKernel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentReport {
    /// Classification of the installation.
    #[serde(rename = "type")]
    pub env_type: EnvironmentType,
    /// Display name (prefix directory name, or "python" for system).
    pub name: String,
    /// Version of each watched package, sentinel when not found.
    pub versions: BTreeMap<String, String>,
    /// Default Jupyter kernel name.
    #[serde(rename = "defaultKernel")]
    pub default_kernel: String,
}

impl EnvironmentReport {
    /// Serialize the report as a single JSON line.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(anyhow::Error::from)?)
    }
}

/// Probe the environment rooted at an explicit prefix.
pub fn probe_prefix(prefix: &Path) -> EnvironmentReport {
    let classification = classify_prefix(prefix);
    tracing::debug!(
        prefix = %prefix.display(),
        env_type = %classification.env_type,
        "classified environment"
    );

    EnvironmentReport {
        env_type: classification.env_type,
        name: classification.name,
        versions: package_versions(prefix),
        default_kernel: default_kernel_name(prefix),
    }
}

/// Resolve the active prefix and probe it.
pub fn probe(explicit_prefix: Option<&Path>) -> Result<EnvironmentReport> {
    let prefix = resolve_prefix(explicit_prefix)?;
    Ok(probe_prefix(&prefix))
}
