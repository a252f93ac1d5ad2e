//! Visual theme and styling.

use console::Style;

/// Terminal styles for archive output.
#[derive(Debug, Clone)]
pub struct SyncTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for secondary text such as paths and durations (dim).
    pub dim: Style,
}

impl Default for SyncTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a plain line, dimmed.
    pub fn format_dim(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }
}

/// Colors are allowed only on a terminal, without `--no-color` or `NO_COLOR`.
pub fn colors_allowed(no_color_flag: bool, no_color_env: bool, is_term: bool) -> bool {
    !no_color_flag && !no_color_env && is_term
}

fn no_color_env() -> bool {
    // https://no-color.org/
    std::env::var_os("NO_COLOR").is_some()
}

/// Check if colors should be enabled on stdout.
pub fn should_use_colors() -> bool {
    colors_allowed(false, no_color_env(), console::Term::stdout().is_term())
}

/// Check if log lines on stderr should carry ANSI colors.
pub fn should_color_logs(no_color_flag: bool) -> bool {
    colors_allowed(
        no_color_flag,
        no_color_env(),
        console::Term::stderr().is_term(),
    )
}
