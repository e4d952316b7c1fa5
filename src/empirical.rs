use bon::Builder;
use itertools::Itertools;
use log::debug;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::die::Die;
use crate::table::Table;
use crate::value::Face;
use crate::{Result, EMPIRICAL_SAMPLE_SIZE};

/// Monte-carlo estimator of a die's face frequencies.
///
/// Rolls a die many times and tallies the observed relative frequency of
/// every face, the simulation-side cross-check of a weighting.
#[derive(Debug, Builder)]
pub struct Empirical<G = ThreadRng>
where
    G: Rng,
{
    #[builder(finish_fn)]
    rng: G,
    #[builder(default = EMPIRICAL_SAMPLE_SIZE)]
    sample_size: usize,
}

impl Default for Empirical<ThreadRng> {
    fn default() -> Self {
        Self::builder().build(thread_rng())
    }
}

impl<G> Empirical<G>
where
    G: Rng,
{
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Observed relative frequency of every face of `die` over
    /// `sample_size` rolls, one row per face in face order.
    ///
    /// Frequencies sum to 1.0 up to rounding; a zero-weight face tallies
    /// exactly 0.0.
    pub fn frequencies<T>(&mut self, die: &Die<T>) -> Result<Table<T, &'static str, f64>>
    where
        T: Face,
    {
        let rolls = die.roll_rng(self.sample_size, &mut self.rng)?;
        debug!("tallied {} samples", rolls.len());
        let counts = rolls.iter().counts();
        let denom = self.sample_size.max(1) as f64;
        let cells = die
            .faces()
            .iter()
            .map(|f| vec![counts.get(&f).copied().unwrap_or(0) as f64 / denom])
            .collect();
        Ok(Table::new(die.faces().to_vec(), vec!["Frequency"], cells))
    }
}
