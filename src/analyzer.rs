use std::collections::BTreeMap;
use std::fmt::{self, Display};

use itertools::Itertools;

use crate::game::OutcomeSource;
use crate::table::Table;
use crate::Result;

/// Ordered tuple of faces, used as the row key of the combination and
/// permutation frequency tables.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Faces<T>(pub Vec<T>);

impl<T> Display for Faces<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

/// Descriptive statistics over a completed play.
///
/// Borrows its source and caches nothing, so every method reflects the
/// source's current outcome table. Methods fail with
/// [`Error::NoOutcome`](crate::Error::NoOutcome) until the source has one.
pub struct Analyzer<'a, S> {
    source: &'a S,
}

impl<'a, S> Analyzer<'a, S>
where
    S: OutcomeSource,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Number of rolls in which every die shows the same face.
    ///
    /// A single-die roll is trivially a jackpot.
    pub fn jackpot(&self) -> Result<usize> {
        let wide = self.source.outcome()?;
        Ok(wide
            .iter_rows()
            .filter(|(_, row)| row.iter().all_equal())
            .count())
    }

    /// Per-roll count of each face observed anywhere in the outcome.
    ///
    /// Columns are in first-appearance order; each row sums to the number of
    /// dice in the game.
    pub fn face_counts_per_roll(&self) -> Result<Table<usize, S::Face, usize>> {
        let wide = self.source.outcome()?;
        let faces: Vec<S::Face> = wide.cells().iter().flatten().unique().cloned().collect();
        let cells = wide
            .cells()
            .iter()
            .map(|row| {
                faces
                    .iter()
                    .map(|face| row.iter().filter(|cell| *cell == face).count())
                    .collect()
            })
            .collect();
        Ok(Table::new(wide.row_labels().to_vec(), faces, cells))
    }

    /// Frequency of each distinct order-insensitive combination of faces.
    ///
    /// Keys are sorted tuples, so rolls differing only in die order collapse
    /// to one row. Only observed combinations appear; counts are positive.
    pub fn combo_count(&self) -> Result<Table<Faces<S::Face>, &'static str, usize>> {
        self.count_rows(|row| {
            let mut key = row.to_vec();
            key.sort();
            Faces(key)
        })
    }

    /// Frequency of each distinct as-rolled permutation of faces.
    ///
    /// Keys preserve die order, so there is at least one permutation row per
    /// combination row.
    pub fn permutation_count(&self) -> Result<Table<Faces<S::Face>, &'static str, usize>> {
        self.count_rows(|row| Faces(row.to_vec()))
    }

    fn count_rows<F>(&self, key: F) -> Result<Table<Faces<S::Face>, &'static str, usize>>
    where
        F: Fn(&[S::Face]) -> Faces<S::Face>,
    {
        let wide = self.source.outcome()?;
        let mut counts = BTreeMap::new();
        for (_, row) in wide.iter_rows() {
            *counts.entry(key(row)).or_insert(0usize) += 1;
        }
        let (rows, cells) = counts
            .into_iter()
            .map(|(k, count)| (k, vec![count]))
            .unzip();
        Ok(Table::new(rows, vec!["Count"], cells))
    }
}
