pub use crate::defs::{coin, d10, d100, d12, d20, d4, d6, d8};
pub use crate::{
    Analyzer, Die, Empirical, Error, Face, Faces, Game, IntoWeight, Outcome, OutcomeSource,
    Result, RollDie, Table, View,
};
