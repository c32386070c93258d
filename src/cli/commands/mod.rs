//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].
//!
//! Every command writes exactly one line to stdout on success; diagnostics
//! go to stderr through the error path in `main`.

pub mod completions;
pub mod dispatcher;
pub mod env;
pub mod manifest;
pub mod release;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
