//! Error types for labprobe operations.
//!
//! This module defines [`LabprobeError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LabprobeError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LabprobeError::Other`) for unexpected errors
//! - Degraded-but-usable results (missing watch-list package, unreadable
//!   kernels directory) substitute sentinels instead of erroring

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for labprobe operations.
#[derive(Debug, Error)]
pub enum LabprobeError {
    /// Manifest file not found at the expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Manifest parsed but the version field is absent or not a string.
    #[error("No version field in manifest at {path}")]
    VersionFieldMissing { path: PathBuf },

    /// Release tag did not follow the expected `v<version>` format.
    #[error("Unexpected release tag name format: '{tag}' does not start with v")]
    UnexpectedTagFormat { tag: String },

    /// Every release in the listing was a draft or a pre-release.
    #[error("No stable release found for {owner}/{repo}")]
    NoStableRelease { owner: String, repo: String },

    /// Releases endpoint returned a non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    ReleaseFetchFailed { status: u16, url: String },

    /// No Python installation prefix could be resolved.
    #[error("Could not resolve a Python environment: {message}")]
    PrefixNotFound { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for labprobe operations.
pub type Result<T> = std::result::Result<T, LabprobeError>;
