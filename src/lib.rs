mod analyzer;
pub mod defs;
mod die;
mod empirical;
mod game;
pub mod prelude;
mod table;
mod value;

pub use analyzer::{Analyzer, Faces};
pub use die::{Die, IntoWeight};
pub use empirical::Empirical;
pub use game::{Game, Outcome, OutcomeSource, RollDie, View};
pub use table::Table;
pub use value::{DefaultFace, Face};

use thiserror::Error;

const EMPIRICAL_SAMPLE_SIZE: usize = 100_000;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("die requires at least one face")]
    NoFaces,
    #[error("duplicate face: {0}")]
    DuplicateFace(String),
    #[error("unknown face: {0}")]
    UnknownFace(String),
    #[error("weight has no numeric interpretation: {0}")]
    InvalidWeight(String),
    #[error("all face weights are zero")]
    ZeroWeightSum,
    #[error("game requires at least one die")]
    NoDice,
    #[error("unknown view {0:?}, expected \"wide\" or \"narrow\"")]
    InvalidView(String),
    #[error("game has not been played yet")]
    NoOutcome,
}

pub type Result<T> = core::result::Result<T, Error>;
