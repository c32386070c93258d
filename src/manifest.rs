//! Manifest version extraction.
//!
//! Reads a `package.json`-style manifest and returns its top-level
//! `version` field. The three failure modes (missing file, malformed
//! JSON, missing field) map to distinct error variants so callers can
//! tell a broken checkout from a broken manifest.

use std::fs;
use std::path::Path;

use crate::error::{LabprobeError, Result};

/// Default manifest file name, resolved against the project root.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// The manifest key holding the version string.
const VERSION_KEY: &str = "version";

/// Extract the version field from the manifest at `path`.
pub fn read_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LabprobeError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => LabprobeError::Io(e),
    })?;

    let manifest: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| LabprobeError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    manifest
        .get(VERSION_KEY)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| LabprobeError::VersionFieldMissing {
            path: path.to_path_buf(),
        })
}
