//! # concord
//!
//! Inter-annotator agreement for sentiment-labeled tweet corpora.
//!
//! Two annotators label the same tweets with one of `pos`, `neu`, `neg` or
//! `irr`. concord joins their files by tweet id, counts label pairs in a
//! 4×4 contingency matrix and reports observed agreement and Cohen's kappa.
//!
//! - [`corpus`]: parse `<id>,<label>[,...]` files
//! - [`agreement`]: contingency matrix, p0, pe, kappa
//! - [`report`]: plain-text rendering
//!
//! # Example
//!
//! ```rust
//! use concord::{compute_agreement, Corpus, MissingIdPolicy};
//!
//! let a = Corpus::parse("1,pos\n2,neg\n3,neu\n", "a").unwrap();
//! let b = Corpus::parse("1,pos\n2,neu\n3,neu\n", "b").unwrap();
//!
//! let report = compute_agreement(&a, &b, MissingIdPolicy::Fail).unwrap();
//! assert_eq!(report.agreement_count, 2);
//! println!("{}", concord::render_report(&report));
//! ```

#![warn(missing_docs)]

pub mod agreement;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod label;
pub mod matrix;
pub mod report;

pub use agreement::{
    compute_agreement, kappa_interpretation, AgreementReport, MissingIdPolicy,
    PERCENT_SAME_DIVISOR,
};
pub use config::AgreementConfig;
pub use corpus::{Corpus, LabeledRecord};
pub use error::{Error, Result};
pub use label::SentimentLabel;
pub use matrix::ContingencyMatrix;
pub use report::{render_matrix, render_report};
