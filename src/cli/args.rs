//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::releases::{DEFAULT_API_URL, DEFAULT_OWNER, DEFAULT_REPO};

/// Labprobe - release and Python environment introspection utilities.
#[derive(Debug, Parser)]
#[command(name = "labprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the latest stable release version of a repository
    LatestRelease(LatestReleaseArgs),

    /// Print the version field of a package.json manifest
    PackageVersion(PackageVersionArgs),

    /// Classify the local Python environment and print a JSON report
    EnvInfo(EnvInfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `latest-release` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LatestReleaseArgs {
    /// Repository owner (organization or user)
    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Repository name
    #[arg(long, default_value = DEFAULT_REPO)]
    pub repo: String,

    /// API base URL (for GitHub Enterprise hosts)
    #[arg(long, env = "LABPROBE_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Default for LatestReleaseArgs {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Arguments for the `package-version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PackageVersionArgs {
    /// Path to the manifest (default: package.json in the project root)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Arguments for the `env-info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvInfoArgs {
    /// Installation prefix to probe (default: resolved from
    /// VIRTUAL_ENV, CONDA_PREFIX, then PATH)
    #[arg(long)]
    pub prefix: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
