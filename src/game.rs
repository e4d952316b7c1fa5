use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;
use rand::{thread_rng, Rng};

use crate::die::Die;
use crate::table::Table;
use crate::value::Face;
use crate::{Error, Result};

/// Anything holding a completed play as a wide outcome table.
///
/// [`Analyzer`](crate::Analyzer) accepts any source, so statistics can be
/// computed over a [`Game`] or over a hand-built table alike.
pub trait OutcomeSource {
    type Face: Face;

    /// Wide table of the most recent play: rows are roll numbers starting
    /// at 1, columns are die positions starting at 0.
    fn outcome(&self) -> Result<&Table<usize, usize, Self::Face>>;
}

/// Presentation of an outcome table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Wide,
    Narrow,
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("wide") {
            Ok(View::Wide)
        } else if s.eq_ignore_ascii_case("narrow") {
            Ok(View::Narrow)
        } else {
            Err(Error::InvalidView(s.to_owned()))
        }
    }
}

/// Row key of the narrow view: one row per (roll, die) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RollDie {
    pub roll: usize,
    pub die: usize,
}

impl Display for RollDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.roll, self.die)
    }
}

/// Outcome snapshot in the shape requested from [`Game::show_outcome`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T>
where
    T: Face,
{
    Wide(Table<usize, usize, T>),
    Narrow(Table<RollDie, &'static str, T>),
}

impl<T> Display for Outcome<T>
where
    T: Face,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Wide(t) => t.fmt(f),
            Outcome::Narrow(t) => t.fmt(f),
        }
    }
}

/// A collection of dice played together.
///
/// `play` rolls every die the same number of times and keeps only the most
/// recent outcome table. Dice need not share a face set, only a face type.
#[derive(Clone, Debug)]
pub struct Game<T>
where
    T: Face,
{
    dice: Vec<Die<T>>,
    outcome: Option<Table<usize, usize, T>>,
}

impl<T> Game<T>
where
    T: Face,
{
    pub fn new(dice: Vec<Die<T>>) -> Result<Self> {
        if dice.is_empty() {
            return Err(Error::NoDice);
        }
        Ok(Self {
            dice,
            outcome: None,
        })
    }

    #[must_use]
    pub fn dice(&self) -> &[Die<T>] {
        &self.dice
    }

    /// Mutable access to one die, for adjusting weights between plays.
    pub fn die_mut(&mut self, index: usize) -> Option<&mut Die<T>> {
        self.dice.get_mut(index)
    }

    /// Rolls every die `num_rolls` times with the given generator and
    /// replaces any previously stored outcome.
    pub fn play_rng<G>(&mut self, num_rolls: usize, rng: &mut G) -> Result<()>
    where
        G: Rng,
    {
        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &self.dice {
            columns.push(die.roll_rng(num_rolls, rng)?);
        }

        let cells = (0..num_rolls)
            .map(|roll| columns.iter().map(|col| col[roll].clone()).collect())
            .collect();
        self.outcome = Some(Table::new(
            (1..=num_rolls).collect(),
            (0..self.dice.len()).collect(),
            cells,
        ));
        debug!(
            "played {num_rolls} rolls across {} dice",
            self.dice.len()
        );
        Ok(())
    }

    /// Plays with the thread-local generator.
    pub fn play(&mut self, num_rolls: usize) -> Result<()> {
        self.play_rng(num_rolls, &mut thread_rng())
    }

    /// Most recent outcome as an owned snapshot in the requested view.
    pub fn show_outcome(&self, view: View) -> Result<Outcome<T>> {
        match view {
            View::Wide => Ok(Outcome::Wide(self.wide()?.clone())),
            View::Narrow => Ok(Outcome::Narrow(self.narrow()?)),
        }
    }

    /// Wide outcome table: rows are roll numbers `1..=n`, columns are die
    /// positions. Fails until the game has been played once.
    pub fn wide(&self) -> Result<&Table<usize, usize, T>> {
        self.outcome.as_ref().ok_or(Error::NoOutcome)
    }

    /// Narrow outcome table: one row per (roll, die) pair in lexicographic
    /// order, single "Outcome" column. A pure reshape of the wide table.
    pub fn narrow(&self) -> Result<Table<RollDie, &'static str, T>> {
        let wide = self.wide()?;
        let n = wide.n_rows() * wide.n_cols();
        let mut rows = Vec::with_capacity(n);
        let mut cells = Vec::with_capacity(n);
        for (&roll, values) in wide.iter_rows() {
            for (die, value) in values.iter().enumerate() {
                rows.push(RollDie { roll, die });
                cells.push(vec![value.clone()]);
            }
        }
        Ok(Table::new(rows, vec!["Outcome"], cells))
    }
}

impl<T> OutcomeSource for Game<T>
where
    T: Face,
{
    type Face = T;

    fn outcome(&self) -> Result<&Table<usize, usize, T>> {
        self.wide()
    }
}
