//! Direction choice and committed movement for an insect.

use crate::board::Board;
use crate::geometry::Movement;
use crate::insect::Insect;
use crate::scanner;
use forage_core::{Direction, Result};
use tracing::trace;

impl Insect {
    pub fn movement(&self) -> &'static Movement {
        Movement::of(self.species)
    }

    /// Visible food along `direction`, without touching the board
    pub fn visible_value(&self, direction: Direction, board: &Board) -> Result<u64> {
        let step = self.movement().step(direction)?;
        Ok(scanner::visible_value(board, self.position, step))
    }

    /// Visible food for every legal direction, in scan order
    pub fn scores(&self, board: &Board) -> Result<Vec<(Direction, u64)>> {
        self.movement()
            .eval_order
            .iter()
            .map(|&direction| Ok((direction, self.visible_value(direction, board)?)))
            .collect()
    }

    /// Direction with the most visible food.
    ///
    /// A candidate wins only by strictly beating the running best, so ties
    /// go to whichever direction comes first in the species' comparison
    /// order, and an all-zero board yields the species default.
    pub fn best_direction(&self, board: &Board) -> Result<Direction> {
        let movement = self.movement();
        let scores = self.scores(board)?;

        let mut best = movement.default_direction();
        let mut max_score = 0;
        for direction in movement.compare_order {
            let score = scores
                .iter()
                .find(|(scanned, _)| scanned == direction)
                .map_or(0, |(_, score)| *score);
            trace!(
                species = %self.species,
                color = %self.color,
                direction = direction.short(),
                score,
                "direction scored"
            );
            if score > max_score {
                max_score = score;
                best = *direction;
            }
        }

        Ok(best)
    }

    /// Move along `direction`, eating food until blocked, and leave the board.
    ///
    /// Returns the amount of food eaten.
    pub fn travel(&self, direction: Direction, board: &mut Board) -> Result<u64> {
        let step = self.movement().step(direction)?;
        Ok(scanner::commit(board, self.position, step, self.color))
    }
}
