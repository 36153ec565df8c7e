//! Sparse square board.

use forage_core::{Entity, Position};
use std::collections::HashMap;

/// A square board of side `size` holding at most one entity per cell.
///
/// Cells are 1-indexed; empty cells are simply absent from the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    size: i32,
    cells: HashMap<Position, Entity>,
}

impl Board {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            cells: HashMap::new(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.within(self.size)
    }

    /// Get the occupant at position
    pub fn get(&self, pos: Position) -> Option<&Entity> {
        self.cells.get(&pos)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Place an entity, returning whatever occupied the cell before
    pub fn insert(&mut self, pos: Position, entity: Entity) -> Option<Entity> {
        self.cells.insert(pos, entity)
    }

    pub fn remove(&mut self, pos: Position) -> Option<Entity> {
        self.cells.remove(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of all food still on the board
    pub fn food_total(&self) -> u64 {
        self.cells
            .values()
            .map(|entity| match entity {
                Entity::Food { amount } => u64::from(*amount),
                Entity::Insect { .. } => 0,
            })
            .sum()
    }

    /// Iterator over all occupied cells
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Entity)> + '_ {
        self.cells.iter().map(|(pos, entity)| (*pos, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_core::{Color, Species};

    #[test]
    fn test_board_creation() {
        let board = Board::new(10);
        assert_eq!(board.size(), 10);
        assert!(board.is_empty());
        assert!(board.contains(Position::new(10, 1)));
        assert!(!board.contains(Position::new(11, 1)));
    }

    #[test]
    fn test_insert_get_remove() {
        let mut board = Board::new(4);
        let pos = Position::new(2, 3);

        assert!(board.insert(pos, Entity::food(7)).is_none());
        assert_eq!(board.get(pos), Some(&Entity::food(7)));
        assert!(board.is_occupied(pos));

        assert_eq!(board.remove(pos), Some(Entity::food(7)));
        assert!(board.get(pos).is_none());
        assert!(board.remove(pos).is_none());
    }

    #[test]
    fn test_food_total_ignores_insects() {
        let mut board = Board::new(5);
        board.insert(Position::new(1, 1), Entity::food(3));
        board.insert(Position::new(2, 2), Entity::food(4));
        board.insert(
            Position::new(3, 3),
            Entity::insect(Species::Ant, Color::Red, Position::new(3, 3)),
        );

        assert_eq!(board.food_total(), 7);
        assert_eq!(board.len(), 3);
        assert_eq!(board.iter().filter(|(_, e)| e.is_food()).count(), 2);
    }
}
