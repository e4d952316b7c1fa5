use std::fmt::{Debug, Display};
use std::hash::Hash;

pub type DefaultFace = i32;

/// Types usable as die faces: enumerable scalar values with a total order.
///
/// Integers, `char`, `&str` and `String` all qualify. Floats do not (`Eq`),
/// which keeps the sample space enumerable.
pub trait Face:
    Sized + Send + Sync + Debug + Display + Clone + PartialEq + Eq + PartialOrd + Ord + Hash
{
}

impl<T> Face for T where
    T: Sized + Send + Sync + Debug + Display + Clone + PartialEq + Eq + PartialOrd + Ord + Hash
{
}
