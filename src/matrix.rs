//! Contingency matrix of (reference label, comparison label) counts.

use crate::label::SentimentLabel;

const N: usize = SentimentLabel::COUNT;

/// 4×4 table of label co-occurrence counts.
///
/// Rows are the reference annotator's label, columns the comparison
/// annotator's label. All cells start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContingencyMatrix {
    cells: [[usize; N]; N],
}

impl ContingencyMatrix {
    /// Empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one item labeled `row` by the reference and `col` by the
    /// comparison annotator.
    pub fn increment(&mut self, row: SentimentLabel, col: SentimentLabel) {
        self.cells[row.index()][col.index()] += 1;
    }

    /// Count in cell `[row][col]`.
    pub fn get(&self, row: SentimentLabel, col: SentimentLabel) -> usize {
        self.cells[row.index()][col.index()]
    }

    /// Sum of all 16 cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Sum of the diagonal: items both annotators labeled the same.
    pub fn diagonal(&self) -> usize {
        SentimentLabel::ALL.iter().map(|&l| self.get(l, l)).sum()
    }

    /// Σᵢ `matrix[label][i]`: how often the reference used `label`.
    pub fn row_sum(&self, label: SentimentLabel) -> usize {
        SentimentLabel::ALL.iter().map(|&i| self.get(label, i)).sum()
    }

    /// Σᵢ `matrix[i][label]`: how often the comparison used `label`.
    pub fn col_sum(&self, label: SentimentLabel) -> usize {
        SentimentLabel::ALL.iter().map(|&i| self.get(i, label)).sum()
    }

    /// Rows in canonical label order, each as `(column label, count)` cells.
    pub fn rows(
        &self,
    ) -> impl Iterator<Item = (SentimentLabel, Vec<(SentimentLabel, usize)>)> + '_ {
        SentimentLabel::ALL.iter().map(move |&row| {
            let cells = SentimentLabel::ALL
                .iter()
                .map(|&col| (col, self.get(row, col)))
                .collect();
            (row, cells)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SentimentLabel::*;

    #[test]
    fn test_new_matrix_is_zero() {
        let m = ContingencyMatrix::new();
        for row in SentimentLabel::ALL {
            for col in SentimentLabel::ALL {
                assert_eq!(m.get(row, col), 0);
            }
        }
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn test_marginals_and_diagonal() {
        let mut m = ContingencyMatrix::new();
        m.increment(Pos, Pos);
        m.increment(Pos, Neg);
        m.increment(Neg, Neg);
        m.increment(Irr, Neu);

        assert_eq!(m.total(), 4);
        assert_eq!(m.diagonal(), 2);
        assert_eq!(m.row_sum(Pos), 2);
        assert_eq!(m.col_sum(Pos), 1);
        assert_eq!(m.col_sum(Neg), 2);
        assert_eq!(m.row_sum(Irr), 1);
        assert_eq!(m.col_sum(Neu), 1);
        assert_eq!(m.row_sum(Neu), 0);
    }

    #[test]
    fn test_rows_follow_canonical_order() {
        let mut m = ContingencyMatrix::new();
        m.increment(Neu, Irr);

        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].0, Neu);
        assert_eq!(rows[1].1[3], (Irr, 1));
        let cols: Vec<SentimentLabel> = rows[0].1.iter().map(|(c, _)| *c).collect();
        assert_eq!(cols, SentimentLabel::ALL);
    }
}
