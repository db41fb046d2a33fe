//! Heatmap cell derivation
//!
//! Turns an N×N count matrix into cells carrying a percentage, a colour
//! intensity and a highlight flag. Rendering only reads the cells.

/// How cell percentages are computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Share of the grand total
    #[default]
    Counts,
    /// Share of the row total
    Rows,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub value: u64,
    pub pct: f64,
    pub intensity: f64,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    rows: Vec<Vec<Cell>>,
}

impl Heatmap {
    /// Derives every cell of `matrix`.
    ///
    /// `focus` selects a class whose row and column are highlighted in
    /// addition to the diagonal.
    pub fn derive(matrix: &[Vec<u64>], normalization: Normalization, focus: Option<usize>) -> Self {
        let row_sums: Vec<u64> = matrix.iter().map(|row| row.iter().sum()).collect();
        let total = row_sums.iter().sum::<u64>().max(1) as f64;
        let max_cell = matrix.iter().flatten().copied().max().unwrap_or(0).max(1) as f64;

        let rows = matrix
            .iter()
            .zip(&row_sums)
            .enumerate()
            .map(|(i, (row, &row_sum))| {
                let row_sum = row_sum.max(1) as f64;
                row.iter()
                    .enumerate()
                    .map(|(j, &value)| {
                        let pct = match normalization {
                            Normalization::Counts => value as f64 / total * 100.0,
                            Normalization::Rows => value as f64 / row_sum * 100.0,
                        };
                        Cell {
                            value,
                            pct,
                            intensity: (value as f64 / max_cell).max(0.1),
                            highlight: i == j || focus.is_some_and(|f| f == i || f == j),
                        }
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::charts::MULTI_CLASS_MATRIX;
    use pretty_assertions::assert_eq;

    fn multi() -> Vec<Vec<u64>> {
        MULTI_CLASS_MATRIX.iter().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn test_row_normalized_rows_sum_to_hundred() {
        let heatmap = Heatmap::derive(&multi(), Normalization::Rows, None);
        for row in heatmap.rows() {
            let sum: f64 = row.iter().map(|cell| cell.pct).sum();
            assert!((sum - 100.0).abs() < 1e-9, "{sum}");
        }
    }

    #[test]
    fn test_counts_mode_sums_to_hundred_overall() {
        let heatmap = Heatmap::derive(&multi(), Normalization::Counts, None);
        let sum: f64 = heatmap.rows().iter().flatten().map(|cell| cell.pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_row_does_not_divide_by_zero() {
        let matrix = vec![vec![0, 0], vec![3, 1]];
        let heatmap = Heatmap::derive(&matrix, Normalization::Rows, None);
        assert_eq!(heatmap.cell(0, 0).map(|c| c.pct), Some(0.0));
        assert_eq!(heatmap.cell(1, 0).map(|c| c.pct), Some(75.0));
    }

    #[test]
    fn test_intensity_is_floored() {
        let matrix = vec![vec![1000, 1], vec![0, 500]];
        let heatmap = Heatmap::derive(&matrix, Normalization::Counts, None);
        assert_eq!(heatmap.cell(0, 0).map(|c| c.intensity), Some(1.0));
        assert_eq!(heatmap.cell(0, 1).map(|c| c.intensity), Some(0.1));
        assert_eq!(heatmap.cell(1, 0).map(|c| c.intensity), Some(0.1));
        assert_eq!(heatmap.cell(1, 1).map(|c| c.intensity), Some(0.5));
    }

    #[test]
    fn test_all_zero_matrix() {
        let matrix = vec![vec![0, 0], vec![0, 0]];
        let heatmap = Heatmap::derive(&matrix, Normalization::Counts, None);
        assert!(heatmap
            .rows()
            .iter()
            .flatten()
            .all(|cell| cell.pct == 0.0 && cell.intensity == 0.1));
    }

    #[test]
    fn test_only_diagonal_highlighted_without_focus() {
        let heatmap = Heatmap::derive(&multi(), Normalization::Counts, None);
        for (i, row) in heatmap.rows().iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                assert_eq!(cell.highlight, i == j, "({i}, {j})");
            }
        }
    }

    #[test]
    fn test_focus_highlights_row_and_column() {
        let heatmap = Heatmap::derive(&multi(), Normalization::Counts, Some(2));
        let highlighted: usize = heatmap
            .rows()
            .iter()
            .flatten()
            .filter(|cell| cell.highlight)
            .count();
        // row and column share (2, 2); five more diagonal cells
        assert_eq!(highlighted, 6 + 6 - 1 + 5);
        assert!(heatmap.cell(2, 0).is_some_and(|c| c.highlight));
        assert!(heatmap.cell(5, 2).is_some_and(|c| c.highlight));
        assert!(heatmap.cell(0, 1).is_some_and(|c| !c.highlight));
    }
}
