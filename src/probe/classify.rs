//! Environment classification and prefix resolution.
//!
//! Classification is a short sequence of ordered, mutually exclusive
//! checks against filesystem markers in the installation prefix:
//!
//! 1. `pyvenv.cfg` file → venv
//! 2. `conda-meta/` directory → conda (`condabin/conda` present → root
//!    install, otherwise a named sub-environment)
//! 3. otherwise → system interpreter
//!
//! Prefix resolution checks `VIRTUAL_ENV`, then `CONDA_PREFIX`, then
//! scans PATH entries for a `python3`/`python` binary directly (no
//! `which` — its behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LabprobeError, Result};

/// Fixed name reported for a system interpreter.
const SYSTEM_ENV_NAME: &str = "python";

/// The fixed set of environment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvironmentType {
    /// Interpreter installed outside any environment manager.
    System,
    /// A virtual environment (venv or virtualenv).
    Venv,
    /// The base environment of a conda installation.
    CondaRoot,
    /// A sub-environment of a conda installation.
    CondaEnv,
}

impl EnvironmentType {
    /// Wire name used in the JSON report.
    pub fn wire_name(&self) -> &'static str {
        match self {
            EnvironmentType::System => "system",
            EnvironmentType::Venv => "venv",
            EnvironmentType::CondaRoot => "conda-root",
            EnvironmentType::CondaEnv => "conda-env",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Result of classifying a prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The detected category.
    pub env_type: EnvironmentType,
    /// Display name: prefix directory name, or "python" for system.
    pub name: String,
}

/// Classify the installation rooted at `prefix`.
pub fn classify_prefix(prefix: &Path) -> Classification {
    let env_type = if prefix.join("pyvenv.cfg").is_file() {
        EnvironmentType::Venv
    } else if prefix.join("conda-meta").is_dir() {
        if is_base_conda(prefix) {
            EnvironmentType::CondaRoot
        } else {
            EnvironmentType::CondaEnv
        }
    } else {
        EnvironmentType::System
    };

    let name = match env_type {
        EnvironmentType::System => SYSTEM_ENV_NAME.to_string(),
        _ => prefix
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| SYSTEM_ENV_NAME.to_string()),
    };

    Classification { env_type, name }
}

/// Check whether a conda prefix is the base install.
///
/// A base install carries the `condabin` launcher; sub-environments
/// under `envs/` do not.
fn is_base_conda(prefix: &Path) -> bool {
    let launcher = if cfg!(windows) {
        "conda.bat"
    } else {
        "conda"
    };
    prefix.join("condabin").join(launcher).is_file()
}

/// Resolve the active installation prefix.
///
/// An explicit prefix (from `--prefix`) wins; otherwise the environment
/// variables and PATH are consulted in order.
pub fn resolve_prefix(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_prefix_with_env(explicit, |key| std::env::var(key), &parse_system_path())
}

/// Resolve the prefix with a custom env lookup and PATH (for testing).
pub fn resolve_prefix_with_env<F>(
    explicit: Option<&Path>,
    env_fn: F,
    path_entries: &[PathBuf],
) -> Result<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Some(prefix) = explicit {
        if prefix.is_dir() {
            return Ok(prefix.to_path_buf());
        }
        return Err(LabprobeError::PrefixNotFound {
            message: format!("'{}' is not a directory", prefix.display()),
        });
    }

    // Activated environments export their prefix directly.
    for var in ["VIRTUAL_ENV", "CONDA_PREFIX"] {
        if let Ok(val) = env_fn(var) {
            let prefix = PathBuf::from(&val);
            if prefix.is_dir() {
                tracing::debug!(%var, prefix = %val, "prefix from environment variable");
                return Ok(prefix);
            }
        }
    }

    // Fall back to the first python binary on PATH.
    for binary in python_binary_names() {
        if let Some(found) = resolve_tool_path(binary, path_entries) {
            return Ok(prefix_for_python_path(&found));
        }
    }

    Err(LabprobeError::PrefixNotFound {
        message: "no python executable on PATH and no environment variable set".to_string(),
    })
}

/// Binary names to look for on PATH, in preference order.
fn python_binary_names() -> &'static [&'static str] {
    if cfg!(windows) {
        &["python.exe", "python3.exe"]
    } else {
        &["python3", "python"]
    }
}

/// Derive the installation prefix from a python binary path.
///
/// Unix installs put the binary at `<prefix>/bin/python3`; Windows
/// installs put `python.exe` directly in the prefix.
pub fn prefix_for_python_path(python_path: &Path) -> PathBuf {
    let bin_dir = python_path.parent().unwrap_or(Path::new("/"));
    if cfg!(windows) {
        bin_dir.to_path_buf()
    } else {
        bin_dir.parent().unwrap_or(bin_dir).to_path_buf()
    }
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
