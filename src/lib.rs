//! igc-sync - Archive IGC flight tracks by date.
//!
//! igc-sync walks a directory of tracker downloads, finds every `*.igc`
//! file (case-insensitive, recursively) and copies it to
//! `logs/<year>/<month>/<day>/`, where the date tokens are the first three
//! dash-separated parts of the file name.
//!
//! # Modules
//!
//! - [`archive`] - Track discovery, date layout and copying
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use igc_sync::archive::Archiver;
//!
//! let report = Archiver::new("logs").archive(Path::new("downloads"))?;
//! println!("{} tracks archived", report.archived.len());
//! # Ok::<(), igc_sync::SyncError>(())
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod ui;

pub use error::{Result, SyncError};
