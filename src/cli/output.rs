//! Output formatting utilities for the CLI

use std::io::{self, Write};

use is_terminal::IsTerminal;
use log::LevelFilter;

/// Colorize text with ANSI escape codes (only if stderr is a terminal)
pub fn color(code: &str, text: &str) -> String {
    if io::stderr().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Log level for the `-v` count and `-q` flag
pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Route `log` records to stderr at the given level
pub fn init_logging(level: LevelFilter) {
    // A second init (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Write the report to stdout
pub fn write_stdout(content: &str) -> Result<(), String> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("Failed to write to stdout: {}", e))
}
