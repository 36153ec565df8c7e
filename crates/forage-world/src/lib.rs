//! Board, movement rules, and the single-turn simulation driver.
//!
//! Insects pick a direction with a read-only scan and then commit to it,
//! one after another, against a shared board.

pub mod board;
pub mod generator;
pub mod geometry;
pub mod insect;
pub mod policy;
pub mod report;
pub mod scanner;
pub mod setup;
pub mod simulation;

pub use board::Board;
pub use geometry::{step_vector, Movement};
pub use insect::Insect;
pub use setup::{parse, BoardBuilder};
pub use simulation::{MoveRecord, Simulation, SimulationResult};
