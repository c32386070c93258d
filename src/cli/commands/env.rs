//! Environment probe command.
//!
//! The `labprobe env-info` command classifies the local Python
//! installation and prints the report as a single JSON line.

use crate::cli::args::EnvInfoArgs;
use crate::error::Result;
use crate::probe;

use super::dispatcher::{Command, CommandResult};

/// The env-info command implementation.
pub struct EnvInfoCommand {
    args: EnvInfoArgs,
}

impl EnvInfoCommand {
    /// Create a new env-info command.
    pub fn new(args: EnvInfoArgs) -> Self {
        Self { args }
    }
}

impl Command for EnvInfoCommand {
    fn execute(&self) -> Result<CommandResult> {
        let report = probe::probe(self.args.prefix.as_deref())?;
        println!("{}", report.to_json_line()?);
        Ok(CommandResult::success())
    }
}
