//! igc-sync CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use igc_sync::cli::{Cli, CommandDispatcher};
use igc_sync::ui::{create_ui, should_color_logs, OutputMode};
use tracing_subscriber::filter::{FilterExt, LevelFilter, Targets};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Errors from this crate are always logged, whatever `RUST_LOG` says.
fn init_tracing(debug: bool, no_color: bool) {
    let filter = if debug {
        EnvFilter::new("igc_sync=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("igc_sync=info"))
    };
    let errors = Targets::new().with_target("igc_sync", LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(should_color_logs(no_color))
                .with_writer(std::io::stderr)
                .with_filter(filter.or(errors)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.no_color);

    tracing::debug!("igc-sync starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(OutputMode::from_flags(cli.verbose, cli.quiet));
    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
