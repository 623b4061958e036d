//! concord - inter-annotator agreement CLI
//!
//! Compares two sentiment annotations of the same tweets and prints the
//! contingency matrix, the identical-label count and Cohen's kappa.
//!
//! # Usage
//!
//! ```bash
//! # Reference annotator first, comparison annotator second
//! concord annotator_a.txt annotator_b.txt
//!
//! # Leave out tweets the second annotator did not label
//! concord --on-missing skip annotator_a.txt annotator_b.txt
//!
//! # Trace every parsed record on stderr
//! concord -vv annotator_a.txt annotator_b.txt
//! ```

use std::process::ExitCode;

use clap::Parser;

use concord::cli::{color, init_logging, log_level, run, write_stdout, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet));

    let result = run(&cli)
        .map_err(|e| e.to_string())
        .and_then(|report| write_stdout(&report));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
