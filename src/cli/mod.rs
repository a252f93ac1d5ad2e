//! Command-line interface for igc-sync.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{ArchiveCommand, Command, CommandDispatcher, CommandResult};
