//! Straight-line ray walks over the board.
//!
//! Both scans share [`Ray`]: start one step away from the origin and keep
//! stepping while the cell is on the board. They differ only in how
//! occupants are treated.

use crate::board::Board;
use forage_core::{Color, Entity, Position};
use tracing::trace;

/// On-board cells along a ray, excluding the origin
#[derive(Debug, Clone)]
pub struct Ray {
    next: Position,
    step: (i32, i32),
    size: i32,
}

impl Ray {
    pub fn new(origin: Position, step: (i32, i32), size: i32) -> Self {
        Self {
            next: origin.add(step.0, step.1),
            step,
            size,
        }
    }
}

impl Iterator for Ray {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if !self.next.within(self.size) || self.step == (0, 0) {
            return None;
        }
        let current = self.next;
        self.next = current.add(self.step.0, self.step.1);
        Some(current)
    }
}

/// Food visible from `origin` along `step`.
///
/// The walk ends at the first insect of any color, which is not counted.
pub fn visible_value(board: &Board, origin: Position, step: (i32, i32)) -> u64 {
    let mut total = 0u64;
    for pos in Ray::new(origin, step, board.size()) {
        match board.get(pos) {
            None => continue,
            Some(Entity::Food { amount }) => total += u64::from(*amount),
            Some(Entity::Insect { .. }) => break,
        }
    }
    total
}

/// Walk from `origin` along `step`, eating every food deposit crossed.
///
/// Insects of `color` are passed over; an insect of another color ends the
/// walk. The mover's own cell at `origin` is cleared afterwards whatever
/// the outcome.
pub fn commit(board: &mut Board, origin: Position, step: (i32, i32), color: Color) -> u64 {
    let mut eaten = 0u64;
    for pos in Ray::new(origin, step, board.size()) {
        match board.get(pos) {
            None => continue,
            Some(Entity::Food { amount }) => {
                let amount = *amount;
                board.remove(pos);
                trace!(x = pos.x, y = pos.y, amount, "food eaten");
                eaten += u64::from(amount);
            }
            Some(Entity::Insect { color: other, .. }) => {
                if *other != color {
                    break;
                }
            }
        }
    }
    board.remove(origin);
    eaten
}
