//! Copying track files into the dated archive.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{Result, SyncError};

use super::discovery::find_track_files;
use super::layout::TrackDate;

/// A track that was copied into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedTrack {
    /// Where the track was found.
    pub source: PathBuf,
    /// Where the copy was written.
    pub destination: PathBuf,
}

/// What happened to a single track file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was copied.
    Archived(ArchivedTrack),
    /// The file name has no date tokens; nothing was written.
    Skipped { file_name: String },
    /// The file already is its own archive copy; nothing was written.
    InPlace { path: PathBuf },
}

/// Summary of one archiving run.
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Tracks copied, in discovery order.
    pub archived: Vec<ArchivedTrack>,
    /// Names of files skipped for having an unexpected name.
    pub skipped: Vec<String>,
    /// Matches left alone because they are their own archive destination.
    pub in_place: Vec<PathBuf>,
    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl ArchiveReport {
    /// Whether any file was skipped for its name.
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Copies track files into `root/<year>/<month>/<day>/`.
#[derive(Debug, Clone)]
pub struct Archiver {
    root: PathBuf,
}

impl Archiver {
    /// Create an archiver writing under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The archive root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Archive a single track file.
    ///
    /// A file whose name does not split into at least three dash-separated
    /// segments is logged and reported as [`FileOutcome::Skipped`]. A file
    /// that already sits at its destination is reported as
    /// [`FileOutcome::InPlace`], since copying it onto itself would
    /// truncate it. Any filesystem failure is returned as an error.
    pub fn archive_file(&self, path: &Path) -> Result<FileOutcome> {
        let Some(os_name) = path.file_name() else {
            let file_name = path.display().to_string();
            tracing::error!("unexpected filename: {}", file_name);
            return Ok(FileOutcome::Skipped { file_name });
        };

        let date = os_name.to_str().and_then(TrackDate::from_file_name);
        let Some(date) = date else {
            let file_name = os_name.to_string_lossy().into_owned();
            tracing::error!("unexpected filename: {}", file_name);
            return Ok(FileOutcome::Skipped { file_name });
        };

        let dir = date.destination(&self.root);
        fs::create_dir_all(&dir).map_err(|source| SyncError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let destination = dir.join(os_name);
        if is_same_file(path, &destination) {
            tracing::debug!("{} is already archived", path.display());
            return Ok(FileOutcome::InPlace {
                path: path.to_path_buf(),
            });
        }

        fs::copy(path, &destination).map_err(|source| SyncError::Copy {
            from: path.to_path_buf(),
            to: destination.clone(),
            source,
        })?;
        tracing::debug!("Copied {} -> {}", path.display(), destination.display());

        Ok(FileOutcome::Archived(ArchivedTrack {
            source: path.to_path_buf(),
            destination,
        }))
    }

    /// Archive every track file found under `input`.
    ///
    /// Stops at the first filesystem error; files copied before it stay
    /// in place.
    pub fn archive(&self, input: &Path) -> Result<ArchiveReport> {
        let started = Instant::now();
        let tracks = find_track_files(input)?;

        let mut report = ArchiveReport::default();
        for track in tracks {
            match self.archive_file(&track)? {
                FileOutcome::Archived(archived) => report.archived.push(archived),
                FileOutcome::Skipped { file_name } => report.skipped.push(file_name),
                FileOutcome::InPlace { path } => report.in_place.push(path),
            }
        }

        report.duration = started.elapsed();
        Ok(report)
    }
}

fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
