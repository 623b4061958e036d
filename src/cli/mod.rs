//! CLI module for the concord binary
//!
//! Argument parsing lives in [`parser`], terminal helpers in [`output`].
//! [`run`] ties them to the library and returns the rendered report, so
//! the whole command can be exercised without touching stdout.

pub mod output;
pub mod parser;

pub use output::*;
pub use parser::*;

use crate::agreement::compute_agreement;
use crate::config::AgreementConfig;
use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::report::render_report;

/// Load both corpora, compute agreement and render the report.
pub fn run(cli: &Cli) -> Result<String> {
    let [reference_path, comparison_path] = cli.files.as_slice() else {
        return Err(Error::argument(format!(
            "expected exactly two files (reference, comparison), got {}",
            cli.files.len()
        )));
    };

    let config = match &cli.config {
        Some(path) => AgreementConfig::load(path)?,
        None => AgreementConfig::default(),
    };
    let policy = config.missing_id_policy(cli.on_missing);
    log::debug!("missing-id policy: {:?}", policy);

    let reference = Corpus::load(reference_path)?;
    let comparison = Corpus::load(comparison_path)?;

    let report = compute_agreement(&reference, &comparison, policy)?;
    log::info!(
        "compared {} ids, {} identical, kappa {:.4}",
        report.compared,
        report.agreement_count,
        report.kappa
    );

    Ok(render_report(&report))
}
