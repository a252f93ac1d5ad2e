//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! reached through [`CommandDispatcher`].

pub mod archive;
pub mod dispatcher;

pub use archive::ArchiveCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
