//! Archive command implementation.
//!
//! `igc-sync <INPUT_DIR>` copies every track under the input directory
//! into the dated archive and prints a summary.

use std::path::{Path, PathBuf};

use crate::archive::{ArchiveReport, Archiver};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The archive command implementation.
pub struct ArchiveCommand {
    input_dir: PathBuf,
    archiver: Archiver,
}

impl ArchiveCommand {
    /// Create a new archive command.
    pub fn new(input_dir: &Path, archive_root: &Path) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            archiver: Archiver::new(archive_root),
        }
    }

    /// Get the input directory.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Get the archive root.
    pub fn archive_root(&self) -> &Path {
        self.archiver.root()
    }

    fn report(&self, report: &ArchiveReport, ui: &mut dyn UserInterface) {
        for track in &report.archived {
            ui.detail(&format!(
                "{} -> {}",
                track.source.display(),
                track.destination.display()
            ));
        }

        ui.success(&format!(
            "Archived {} into {} ({})",
            count(report.archived.len(), "track file"),
            self.archive_root().display(),
            format_duration(report.duration)
        ));

        if report.has_skipped() {
            ui.warning(&format!(
                "Skipped {} with unexpected names",
                count(report.skipped.len(), "file")
            ));
        }
    }
}

impl Command for ArchiveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!(
            "Archiving {} into {}",
            self.input_dir.display(),
            self.archive_root().display()
        );

        ui.message(&format!("Scanning {}", self.input_dir.display()));
        let report = self.archiver.archive(&self.input_dir)?;
        self.report(&report, ui);

        Ok(CommandResult::success())
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn setup_input(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        fs::create_dir_all(&input).unwrap();
        for name in files {
            fs::write(input.join(name), name.as_bytes()).unwrap();
        }
        temp
    }

    #[test]
    fn archive_command_creation() {
        let cmd = ArchiveCommand::new(Path::new("in"), Path::new("logs"));
        assert_eq!(cmd.input_dir(), Path::new("in"));
        assert_eq!(cmd.archive_root(), Path::new("logs"));
    }

    #[test]
    fn archive_command_reports_success() {
        let temp = setup_input(&["2024-03-15-a.igc", "2024-03-15-b.igc"]);
        let cmd = ArchiveCommand::new(&temp.path().join("in"), &temp.path().join("logs"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Scanning "));
        assert!(ui.has_success("Archived 2 track files"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn archive_command_warns_about_skipped_files() {
        let temp = setup_input(&["2024-03-15-a.igc", "bad.igc"]);
        let cmd = ArchiveCommand::new(&temp.path().join("in"), &temp.path().join("logs"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_success("Archived 1 track file "));
        assert!(ui.has_warning("Skipped 1 file with unexpected names"));
    }

    #[test]
    fn archive_command_lists_files_as_details() {
        let temp = setup_input(&["2024-03-15-a.igc"]);
        let cmd = ArchiveCommand::new(&temp.path().join("in"), &temp.path().join("logs"));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.details().len(), 1);
        assert!(ui.details()[0].contains("2024-03-15-a.igc ->"));
    }

    #[test]
    fn archive_command_propagates_missing_input() {
        let temp = TempDir::new().unwrap();
        let cmd = ArchiveCommand::new(&temp.path().join("missing"), &temp.path().join("logs"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);

        assert!(matches!(result, Err(SyncError::InputNotFound { .. })));
    }

    #[test]
    fn count_pluralizes() {
        assert_eq!(count(0, "file"), "0 files");
        assert_eq!(count(1, "file"), "1 file");
        assert_eq!(count(3, "track file"), "3 track files");
    }

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }
}
