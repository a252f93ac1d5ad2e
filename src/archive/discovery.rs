//! Track file discovery.
//!
//! Tracks are found with a recursive glob rooted at the input directory.
//! The `.igc` extension is matched without regard to case.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};

use crate::error::{Result, SyncError};

/// Glob, relative to the input directory, that selects track files.
pub const TRACK_PATTERN: &str = "**/*.igc";

/// Build the search pattern for `input`.
///
/// Glob metacharacters in the input path itself are escaped so that only
/// [`TRACK_PATTERN`] is interpreted.
pub fn track_pattern(input: &Path) -> Result<String> {
    let input_str = input.to_str().ok_or_else(|| SyncError::InvalidPattern {
        path: input.to_path_buf(),
        message: "path is not valid UTF-8".to_string(),
    })?;

    let pattern = Path::new(&Pattern::escape(input_str)).join(TRACK_PATTERN);
    pattern
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| SyncError::InvalidPattern {
            path: input.to_path_buf(),
            message: "pattern is not valid UTF-8".to_string(),
        })
}

/// Find every track file under `input`, recursively.
///
/// Directories whose name happens to end in `.igc` are ignored. The whole
/// tree is walked before returning.
pub fn find_track_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(SyncError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    if !input.is_dir() {
        return Err(SyncError::InputNotDirectory {
            path: input.to_path_buf(),
        });
    }

    let pattern = track_pattern(input)?;
    let options = MatchOptions {
        case_sensitive: false,
        ..Default::default()
    };

    let entries = glob_with(&pattern, options).map_err(|e| SyncError::InvalidPattern {
        path: input.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut tracks = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SyncError::Scan {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            tracks.push(path);
        } else {
            tracing::debug!("Ignoring non-file match {}", path.display());
        }
    }

    tracing::debug!("Found {} track file(s) under {}", tracks.len(), input.display());
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"B").unwrap();
        path
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn finds_tracks_at_root() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "2024-03-15-a.igc");

        let found = find_track_files(temp.path()).unwrap();
        assert_eq!(names(&found), vec!["2024-03-15-a.igc"]);
    }

    #[test]
    fn finds_tracks_in_nested_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "sub/2023-01-01-x.igc");
        touch(temp.path(), "sub/deeper/2023-01-02-y.igc");

        let found = find_track_files(temp.path()).unwrap();
        assert_eq!(names(&found), vec!["2023-01-01-x.igc", "2023-01-02-y.igc"]);
    }

    #[test]
    fn extension_match_ignores_case() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "TRACK-2022-05-09-a.IGC");
        touch(temp.path(), "TRACK-2022-05-09-b.igc");
        touch(temp.path(), "TRACK-2022-05-09-c.Igc");

        let found = find_track_files(temp.path()).unwrap();
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn ignores_other_extensions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "2024-03-15-a.gpx");
        touch(temp.path(), "2024-03-15-a.igc.bak");
        touch(temp.path(), "notes.txt");

        let found = find_track_files(temp.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn ignores_directories_named_like_tracks() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2024-03-15-dir.igc")).unwrap();

        let found = find_track_files(temp.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn escapes_glob_characters_in_input() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("club [2024]");
        touch(&input, "2024-03-15-a.igc");

        let found = find_track_files(&input).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn missing_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = find_track_files(&temp.path().join("nope"));
        assert!(matches!(result, Err(SyncError::InputNotFound { .. })));
    }

    #[test]
    fn file_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = touch(temp.path(), "2024-03-15-a.igc");

        let result = find_track_files(&file);
        assert!(matches!(result, Err(SyncError::InputNotDirectory { .. })));
    }

    #[test]
    fn pattern_ends_with_track_glob() {
        let pattern = track_pattern(Path::new("tracks")).unwrap();
        assert!(pattern.starts_with("tracks"));
        assert!(pattern.ends_with("*.igc"));
    }
}
