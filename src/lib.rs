//! Labprobe - release and Python environment introspection utilities.
//!
//! Labprobe is a small CLI that bundles the introspection helpers a
//! JupyterLab-based desktop app needs at build and run time: looking up
//! the latest stable release of a GitHub repository, reading the version
//! field out of a `package.json` manifest, and classifying a local Python
//! installation (system / venv / conda) along with the versions of the
//! Jupyter packages installed into it.
//!
//! Each subcommand is an independent, single-purpose operation: it runs
//! once, writes a single line to stdout, and signals failure through the
//! process exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest version extraction
//! - [`probe`] - Python environment classification and reporting
//! - [`releases`] - Release listing lookup
//!
//! # Example
//!
//! ```
//! use labprobe::releases::{first_stable, ReleaseRecord};
//!
//! let records = vec![
//!     ReleaseRecord::prerelease("v4.0.0a1"),
//!     ReleaseRecord::stable("v3.2.1"),
//! ];
//! assert_eq!(first_stable(&records).unwrap(), Some("3.2.1".to_string()));
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod probe;
pub mod releases;

pub use error::{LabprobeError, Result};
