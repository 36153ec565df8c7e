//! Simulation driver for a single foraging turn.

use crate::board::Board;
use crate::insect::Insect;
use forage_core::{Color, Direction, Result, Species};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

#[derive(Debug)]
pub struct Simulation {
    board: Board,
    /// Insects in registration order
    insects: Vec<Insect>,
}

impl Simulation {
    /// Wrap a board whose insects are already placed on it
    pub fn new(board: Board, insects: Vec<Insect>) -> Self {
        Self { board, insects }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn insects(&self) -> &[Insect] {
        &self.insects
    }

    /// Move every insect once, in registration order, against the live board
    #[instrument(skip(self), fields(board_size = self.board.size(), insects = self.insects.len()))]
    pub fn run(&mut self) -> Result<SimulationResult> {
        let food_before = self.board.food_total();
        info!("Starting simulation turn");

        let mut records = Vec::with_capacity(self.insects.len());
        for insect in &self.insects {
            let direction = insect.best_direction(&self.board)?;
            let eaten = insect.travel(direction, &mut self.board)?;

            debug!(
                index = insect.index,
                species = %insect.species,
                color = %insect.color,
                x = insect.position.x,
                y = insect.position.y,
                direction = %direction,
                eaten,
                "insect moved"
            );

            records.push(MoveRecord {
                color: insect.color,
                species: insect.species,
                direction,
                eaten,
            });
        }

        let food_remaining = self.board.food_total();
        info!(
            food_before,
            food_eaten = food_before - food_remaining,
            food_remaining,
            "Simulation turn complete"
        );

        Ok(SimulationResult {
            records,
            food_remaining,
        })
    }
}

/// Outcome of one insect's move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: Color,
    pub species: Species,
    pub direction: Direction,
    pub eaten: u64,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.color, self.species, self.direction, self.eaten
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One record per insect, in registration order
    pub records: Vec<MoveRecord>,
    pub food_remaining: u64,
}

impl SimulationResult {
    pub fn total_eaten(&self) -> u64 {
        self.records.iter().map(|record| record.eaten).sum()
    }
}
