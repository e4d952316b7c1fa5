use std::fmt::{self, Display};

use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table as Grid};

/// Labeled two-dimensional table: ordered row labels, ordered column labels
/// and a dense row-major cell matrix.
///
/// Every tabular result in this crate (die snapshots, game outcomes,
/// analyzer statistics) is one of these, differing only in label and cell
/// types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<R, C, V> {
    row_labels: Vec<R>,
    col_labels: Vec<C>,
    cells: Vec<Vec<V>>,
}

impl<R, C, V> Table<R, C, V> {
    /// Panics if `cells` is not `row_labels.len()` rows of
    /// `col_labels.len()` values each.
    #[must_use]
    pub fn new(row_labels: Vec<R>, col_labels: Vec<C>, cells: Vec<Vec<V>>) -> Self {
        assert_eq!(row_labels.len(), cells.len(), "row count mismatch");
        assert!(
            cells.iter().all(|row| row.len() == col_labels.len()),
            "column count mismatch"
        );
        Self {
            row_labels,
            col_labels,
            cells,
        }
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    #[must_use]
    pub fn row_labels(&self) -> &[R] {
        &self.row_labels
    }

    #[must_use]
    pub fn col_labels(&self) -> &[C] {
        &self.col_labels
    }

    #[must_use]
    pub fn cells(&self) -> &[Vec<V>] {
        &self.cells
    }

    /// Cell by position.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<&V> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Row by position, as `(label, values)`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<(&R, &[V])> {
        self.row_labels
            .get(index)
            .map(|label| (label, self.cells[index].as_slice()))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = (&R, &[V])> {
        self.row_labels
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

impl<R, C, V> Table<R, C, V>
where
    R: PartialEq,
    C: PartialEq,
{
    /// Cell by label.
    #[must_use]
    pub fn get(&self, row: &R, col: &C) -> Option<&V> {
        let r = self.row_labels.iter().position(|x| x == row)?;
        let c = self.col_labels.iter().position(|x| x == col)?;
        self.at(r, c)
    }
}

impl<R, C, V> Display for Table<R, C, V>
where
    R: Display,
    C: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = Grid::new();
        grid.load_preset(UTF8_NO_BORDERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec![Cell::new("")];
        header.extend(self.col_labels.iter().map(|c| Cell::new(c.to_string())));
        grid.set_header(header);

        for (label, row) in self.iter_rows() {
            let mut cells = vec![Cell::new(label.to_string())];
            cells.extend(row.iter().map(|v| Cell::new(v.to_string())));
            grid.add_row(cells);
        }

        write!(f, "{grid}")
    }
}
