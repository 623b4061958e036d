//! Cohen's kappa between two annotators.
//!
//! The reference corpus drives the join: every id it contains is looked up
//! in the comparison corpus, and the pair of labels is counted in a
//! [`ContingencyMatrix`]. From the matrix we derive
//!
//! - **agreement count**: the diagonal sum,
//! - **p0**: observed agreement, `agreement / cnt`,
//! - **pe**: chance agreement, `Σₑ row(e)·col(e) / cnt²`,
//! - **kappa**: `(p0 - pe) / (1 - pe)`.
//!
//! # Example
//!
//! ```rust
//! use concord::agreement::{compute_agreement, MissingIdPolicy};
//! use concord::corpus::Corpus;
//!
//! let a = Corpus::from_pairs("a", [("1", "pos"), ("2", "neg")]);
//! let b = Corpus::from_pairs("b", [("1", "pos"), ("2", "neg")]);
//!
//! let report = compute_agreement(&a, &b, MissingIdPolicy::Fail).unwrap();
//! assert_eq!(report.agreement_count, 2);
//! assert_eq!(report.kappa, 1.0);
//! ```

use serde::Deserialize;

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::label::SentimentLabel;
use crate::matrix::ContingencyMatrix;

/// Fixed divisor applied to the agreement count to produce
/// [`AgreementReport::percent_same`].
///
/// This is a constant scale, not the number of compared items, so the value
/// is only a true percentage when exactly 100 tweets were compared.
pub const PERCENT_SAME_DIVISOR: f64 = 100.0;

/// What to do when a reference id has no label in the comparison corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingIdPolicy {
    /// Abort with a lookup error
    #[default]
    Fail,
    /// Leave the id out of the comparison and report it
    Skip,
}

/// Everything computed for one pair of corpora.
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementReport {
    /// Label co-occurrence counts
    pub matrix: ContingencyMatrix,
    /// Number of compared ids (`cnt`)
    pub compared: usize,
    /// Ids on the diagonal (same label from both annotators)
    pub agreement_count: usize,
    /// `agreement_count / PERCENT_SAME_DIVISOR`
    pub percent_same: f64,
    /// Observed agreement proportion
    pub p0: f64,
    /// Expected (chance) agreement proportion
    pub pe: f64,
    /// Cohen's kappa
    pub kappa: f64,
    /// Reference ids absent from the comparison corpus (only with
    /// [`MissingIdPolicy::Skip`])
    pub skipped_ids: Vec<String>,
}

/// Join two corpora by id and compute agreement statistics.
///
/// # Errors
///
/// - [`Error::MissingId`] when a reference id is absent from `comparison`
///   and `policy` is [`MissingIdPolicy::Fail`]
/// - [`Error::UnknownLabel`] when either side uses a token outside
///   `pos`/`neu`/`neg`/`irr` for a compared id
/// - [`Error::Arithmetic`] when nothing was compared or when chance
///   agreement is 1 (kappa undefined)
pub fn compute_agreement(
    reference: &Corpus,
    comparison: &Corpus,
    policy: MissingIdPolicy,
) -> Result<AgreementReport> {
    let mut matrix = ContingencyMatrix::new();
    let mut cnt = 0usize;
    let mut skipped_ids = Vec::new();

    for (id, ref_token) in reference.iter() {
        let cmp_token = match comparison.get(id) {
            Some(token) => token,
            None => match policy {
                MissingIdPolicy::Fail => {
                    return Err(Error::MissingId {
                        id: id.to_string(),
                        source_name: comparison.source().to_string(),
                    })
                }
                MissingIdPolicy::Skip => {
                    log::warn!("id {} missing from {}, skipped", id, comparison.source());
                    skipped_ids.push(id.to_string());
                    continue;
                }
            },
        };

        let row = resolve_label(id, ref_token)?;
        let col = resolve_label(id, cmp_token)?;
        matrix.increment(row, col);
        cnt += 1;
    }

    if cnt == 0 {
        return Err(Error::arithmetic(format!(
            "no ids of {} could be compared against {} (division by zero)",
            reference.source(),
            comparison.source()
        )));
    }

    let agreement_count = matrix.diagonal();
    let percent_same = agreement_count as f64 / PERCENT_SAME_DIVISOR;
    let p0 = agreement_count as f64 / cnt as f64;
    let pe = expected_agreement(&matrix, cnt);

    if (1.0 - pe).abs() < 1e-10 {
        return Err(Error::arithmetic(
            "expected agreement is 1, kappa is undefined (division by zero)",
        ));
    }
    let kappa = (p0 - pe) / (1.0 - pe);

    log::debug!(
        "compared={} agreement={} p0={:.6} pe={:.6} kappa={:.6}",
        cnt,
        agreement_count,
        p0,
        pe,
        kappa
    );

    Ok(AgreementReport {
        matrix,
        compared: cnt,
        agreement_count,
        percent_same,
        p0,
        pe,
        kappa,
        skipped_ids,
    })
}

fn resolve_label(id: &str, token: &str) -> Result<SentimentLabel> {
    SentimentLabel::from_token(token).ok_or_else(|| Error::UnknownLabel {
        id: id.to_string(),
        label: token.to_string(),
    })
}

/// Chance agreement from the matrix marginals.
///
/// For each label the count of items the comparison annotator gave that
/// label (column sum) is multiplied by the count the reference annotator
/// gave it (row sum). The textbook formula names the factors the other way
/// round; multiplication commutes, so the value is the same.
fn expected_agreement(matrix: &ContingencyMatrix, cnt: usize) -> f64 {
    let mut pe = 0.0;
    for e in SentimentLabel::ALL {
        let n_pi = matrix.col_sum(e) as f64;
        let n_ip = matrix.row_sum(e) as f64;
        pe += n_pi * n_ip;
    }
    let cnt = cnt as f64;
    pe / (cnt * cnt)
}

/// Interpret a Cohen's kappa value on the Landis & Koch scale.
pub fn kappa_interpretation(kappa: f64) -> &'static str {
    if kappa < 0.0 {
        "Less than chance agreement"
    } else if kappa < 0.20 {
        "Slight agreement"
    } else if kappa < 0.40 {
        "Fair agreement"
    } else if kappa < 0.60 {
        "Moderate agreement"
    } else if kappa < 0.80 {
        "Substantial agreement"
    } else {
        "Almost perfect agreement"
    }
}
