use itertools::Itertools;
use rand::{thread_rng, Rng};

use crate::table::Table;
use crate::value::{DefaultFace, Face};
use crate::{Error, Result};

/// A weighted die: a fixed, ordered set of distinct faces, each carrying a
/// mutable non-negative weight. All weights start at 1.0.
///
/// Rolling samples faces with replacement, proportionally to the weights as
/// they are at the time of the call. The die itself never changes during a
/// roll; `change_weight` is the only mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Die<T = DefaultFace>
where
    T: Face,
{
    faces: Vec<T>,
    weights: Vec<f64>,
}

/// Values accepted as a weight by [`Die::change_weight`].
///
/// Numeric types convert infallibly; strings must parse as a number.
pub trait IntoWeight {
    fn into_weight(self) -> Result<f64>;
}

macro_rules! impl_into_weight_num {
    ($typ:ty) => {
        impl IntoWeight for $typ {
            fn into_weight(self) -> Result<f64> {
                Ok(self as f64)
            }
        }
    };
}

impl IntoWeight for f64 {
    fn into_weight(self) -> Result<f64> {
        Ok(self)
    }
}

impl_into_weight_num!(f32);
impl_into_weight_num!(u8);
impl_into_weight_num!(u16);
impl_into_weight_num!(u32);
impl_into_weight_num!(u64);
impl_into_weight_num!(usize);
impl_into_weight_num!(i8);
impl_into_weight_num!(i16);
impl_into_weight_num!(i32);
impl_into_weight_num!(i64);

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64> {
        self.trim()
            .parse()
            .map_err(|_| Error::InvalidWeight(self.to_owned()))
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}

impl Die {
    /// Standard numeric die with faces `1..=sides`, all weights 1.0.
    ///
    /// Panics if `sides` is not positive.
    #[must_use]
    pub fn numeric(sides: DefaultFace) -> Self {
        assert!(sides > 0, "numeric die requires at least one side");
        Self {
            faces: (1..=sides).collect(),
            weights: vec![1.0; sides as usize],
        }
    }
}

impl<T> Die<T>
where
    T: Face,
{
    /// Builds a die from an ordered collection of distinct faces.
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let faces: Vec<T> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(Error::NoFaces);
        }
        if let Some(dup) = faces.iter().duplicates().next() {
            return Err(Error::DuplicateFace(dup.to_string()));
        }
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    /// Current weight of `face`, if the die has it.
    #[must_use]
    pub fn weight(&self, face: &T) -> Option<f64> {
        self.position(face).map(|i| self.weights[i])
    }

    /// Replaces the weight of a single face.
    ///
    /// Zero is accepted and removes the face from the sample space; negative
    /// and non-finite values are rejected.
    pub fn change_weight<W>(&mut self, face: &T, weight: W) -> Result<()>
    where
        W: IntoWeight,
    {
        let i = self
            .position(face)
            .ok_or_else(|| Error::UnknownFace(face.to_string()))?;
        let w = weight.into_weight()?;
        if !w.is_finite() || w < 0.0 {
            return Err(Error::InvalidWeight(w.to_string()));
        }
        self.weights[i] = w;
        Ok(())
    }

    /// Rolls the die `num_rolls` times with the given generator.
    ///
    /// Fails with [`Error::ZeroWeightSum`] if no face has a positive weight.
    /// `num_rolls` of zero yields an empty sequence.
    pub fn roll_rng<G>(&self, num_rolls: usize, rng: &mut G) -> Result<Vec<T>>
    where
        G: Rng,
    {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            return Err(Error::ZeroWeightSum);
        }
        let mut result = Vec::with_capacity(num_rolls);
        for _ in 0..num_rolls {
            result.push(self.sample_one(total, rng).clone());
        }
        Ok(result)
    }

    /// Rolls with the thread-local generator.
    pub fn roll(&self, num_rolls: usize) -> Result<Vec<T>> {
        self.roll_rng(num_rolls, &mut thread_rng())
    }

    /// Snapshot of the face/weight mapping, detached from the die.
    #[must_use]
    pub fn show(&self) -> Table<T, &'static str, f64> {
        Table::new(
            self.faces.clone(),
            vec!["Weight"],
            self.weights.iter().map(|w| vec![*w]).collect(),
        )
    }

    fn sample_one<G>(&self, total: f64, rng: &mut G) -> &T
    where
        G: Rng,
    {
        let x = rng.gen_range(0.0..total);
        let mut pos = 0.0;
        let mut last = 0;
        for (i, &w) in self.weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            pos += w;
            last = i;
            if x < pos {
                return &self.faces[i];
            }
        }
        // x can land on `total` only through rounding in the running sum
        &self.faces[last]
    }

    fn position(&self, face: &T) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
}
