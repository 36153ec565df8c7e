//! Error types for the simulation.
//!
//! The setup variants carry the exact messages written to the results file
//! when an input document is rejected.

use crate::types::{Direction, Species};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{species} cannot move {direction}")]
    UnsupportedDirection {
        species: Species,
        direction: Direction,
    },

    #[error("Invalid board size")]
    InvalidBoardSize,

    #[error("Invalid number of insects")]
    InvalidNumberOfInsects,

    #[error("Invalid number of food points")]
    InvalidNumberOfFoodPoints,

    #[error("Invalid insect color")]
    InvalidInsectColor,

    #[error("Invalid insect type")]
    InvalidInsectType,

    #[error("Invalid entity position")]
    InvalidEntityPosition,

    #[error("Duplicate insects")]
    DuplicateInsects,

    #[error("Two entities in the same position")]
    TwoEntitiesOnSamePosition,

    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Invalid limits: {0}")]
    InvalidLimits(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether the error rejects the input document rather than signalling
    /// a broken contract or an environment failure
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            Error::UnsupportedDirection { .. }
                | Error::InvalidLimits(_)
                | Error::Io(_)
                | Error::Serialization(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
