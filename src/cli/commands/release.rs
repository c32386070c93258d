//! Latest stable release lookup.
//!
//! The `labprobe latest-release` command prints the newest non-draft,
//! non-prerelease version of a repository, with the tag marker stripped.

use crate::cli::args::LatestReleaseArgs;
use crate::error::{LabprobeError, Result};
use crate::releases::ReleaseClient;

use super::dispatcher::{Command, CommandResult};

/// The latest-release command implementation.
pub struct LatestReleaseCommand {
    args: LatestReleaseArgs,
}

impl LatestReleaseCommand {
    /// Create a new latest-release command.
    pub fn new(args: LatestReleaseArgs) -> Self {
        Self { args }
    }
}

impl Command for LatestReleaseCommand {
    fn execute(&self) -> Result<CommandResult> {
        let client = ReleaseClient::with_api_url(&self.args.api_url)?;
        let version = client
            .latest_stable(&self.args.owner, &self.args.repo)?
            .ok_or_else(|| LabprobeError::NoStableRelease {
                owner: self.args.owner.clone(),
                repo: self.args.repo.clone(),
            })?;

        println!("{}", version);
        Ok(CommandResult::success())
    }
}
