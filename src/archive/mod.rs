//! Track archiving.
//!
//! This module provides:
//! - [`find_track_files`] for recursive, case-insensitive `*.igc` discovery
//! - [`TrackDate`] for deriving `year/month/day` from a file name
//! - [`Archiver`] for copying tracks into the dated archive tree
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use igc_sync::archive::TrackDate;
//!
//! let date = TrackDate::from_file_name("2024-03-15-flight.igc").unwrap();
//! assert_eq!(
//!     date.destination(Path::new("logs")),
//!     Path::new("logs").join("2024").join("03").join("15")
//! );
//! ```

pub mod archiver;
pub mod discovery;
pub mod layout;

pub use archiver::{ArchiveReport, ArchivedTrack, Archiver, FileOutcome};
pub use discovery::{find_track_files, track_pattern, TRACK_PATTERN};
pub use layout::{TrackDate, DEFAULT_ARCHIVE_ROOT};
