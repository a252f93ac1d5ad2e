//! Console UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, SyncTheme, UserInterface};

/// UI writing to the process's stdout and stderr.
///
/// Status lines go to stdout; warnings and errors go to stderr so they
/// survive `--quiet` and output redirection.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: SyncTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, colored when stdout is a terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            SyncTheme::new()
        } else {
            SyncTheme::plain()
        };

        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: SyncTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.out, "{}", self.theme.format_dim(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
