//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::archive::DEFAULT_ARCHIVE_ROOT;

/// Archive IGC flight tracks into a year/month/day directory tree.
#[derive(Debug, Parser)]
#[command(name = "igc-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing IGC tracks (searched recursively)
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory the dated archive is written under
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ARCHIVE_ROOT)]
    pub archive_root: PathBuf,

    /// List every archived file
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
