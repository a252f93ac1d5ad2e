//! Archive layout derived from track file names.

use std::path::{Path, PathBuf};

/// Default archive root, relative to the working directory.
pub const DEFAULT_ARCHIVE_ROOT: &str = "logs";

/// The date tokens taken from a track file name.
///
/// Tokens are kept verbatim: `a-2021-07-04-001.igc` yields `a`, `2021`
/// and `07`. Nothing is parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDate {
    /// First dash-separated segment.
    pub year: String,
    /// Second dash-separated segment.
    pub month: String,
    /// Third dash-separated segment.
    pub day: String,
}

impl TrackDate {
    /// Split a file name on `-` and take the first three segments.
    ///
    /// Returns `None` when the name has fewer than three segments.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let mut parts = name.split('-');
        let year = parts.next()?;
        let month = parts.next()?;
        let day = parts.next()?;

        Some(Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        })
    }

    /// Directory under `root` where tracks of this date are stored.
    pub fn destination(&self, root: &Path) -> PathBuf {
        root.join(&self.year).join(&self.month).join(&self.day)
    }
}
