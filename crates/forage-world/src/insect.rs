//! Insect state.

use forage_core::{Color, Entity, Position, Species};
use serde::{Deserialize, Serialize};

/// An insect registered on the board.
///
/// `position` mirrors the insect's board key until it travels; after that
/// the board no longer holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insect {
    /// Registration index, which is also the processing order
    pub index: usize,
    pub species: Species,
    pub color: Color,
    pub position: Position,
}

impl Insect {
    pub fn new(index: usize, species: Species, color: Color, position: Position) -> Self {
        Self {
            index,
            species,
            color,
            position,
        }
    }

    /// Board representation of this insect
    pub fn to_entity(&self) -> Entity {
        Entity::insect(self.species, self.color, self.position)
    }

    pub fn same_kind(&self, other: &Insect) -> bool {
        self.species == other.species && self.color == other.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insect_creation() {
        let insect = Insect::new(0, Species::Spider, Color::Blue, Position::new(2, 3));
        assert_eq!(insect.index, 0);
        assert_eq!(
            insect.to_entity(),
            Entity::Insect {
                species: Species::Spider,
                color: Color::Blue,
                position: Position::new(2, 3),
            }
        );
    }

    #[test]
    fn test_same_kind() {
        let a = Insect::new(0, Species::Ant, Color::Red, Position::new(1, 1));
        let b = Insect::new(1, Species::Ant, Color::Red, Position::new(2, 2));
        let c = Insect::new(2, Species::Ant, Color::Green, Position::new(3, 3));
        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&c));
    }
}
