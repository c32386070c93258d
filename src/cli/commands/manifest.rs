//! Manifest version lookup.
//!
//! The `labprobe package-version` command prints the `version` field of
//! a package.json manifest.

use std::path::{Path, PathBuf};

use crate::cli::args::PackageVersionArgs;
use crate::error::Result;
use crate::manifest::{read_version, DEFAULT_MANIFEST};

use super::dispatcher::{Command, CommandResult};

/// The package-version command implementation.
pub struct PackageVersionCommand {
    project_root: PathBuf,
    args: PackageVersionArgs,
}

impl PackageVersionCommand {
    /// Create a new package-version command.
    pub fn new(project_root: &Path, args: PackageVersionArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Resolve the manifest path: explicit `--path`, or the default
    /// manifest in the project root.
    fn manifest_path(&self) -> PathBuf {
        match &self.args.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.project_root.join(path),
            None => self.project_root.join(DEFAULT_MANIFEST),
        }
    }
}

impl Command for PackageVersionCommand {
    fn execute(&self) -> Result<CommandResult> {
        let path = self.manifest_path();
        tracing::debug!(path = %path.display(), "reading manifest version");
        let version = read_version(&path)?;

        println!("{}", version);
        Ok(CommandResult::success())
    }
}
