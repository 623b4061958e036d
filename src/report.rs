//! Plain-text rendering of agreement results.

use std::fmt::Write;

use crate::agreement::{kappa_interpretation, AgreementReport};
use crate::matrix::ContingencyMatrix;

/// Render the matrix as one line per reference label, each cell written as
/// `[row][col][count]` followed by a tab.
pub fn render_matrix(matrix: &ContingencyMatrix) -> String {
    let mut out = String::new();
    for (row, cells) in matrix.rows() {
        for (col, count) in cells {
            let _ = write!(out, "[{}][{}][{}]\t", row, col, count);
        }
        out.push('\n');
    }
    out
}

/// Render the full report: matrix, then the metric lines.
pub fn render_report(report: &AgreementReport) -> String {
    let mut out = render_matrix(&report.matrix);

    if !report.skipped_ids.is_empty() {
        let _ = writeln!(out, "skipped ids: {}", report.skipped_ids.len());
    }
    let _ = writeln!(out, "same labels: {:.6} %", report.percent_same);
    let _ = writeln!(
        out,
        "kappa: {:.6} ({})",
        report.kappa,
        kappa_interpretation(report.kappa)
    );
    out
}
