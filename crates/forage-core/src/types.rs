//! Core type definitions for the simulation.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1-indexed cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether both coordinates lie in `[1, size]`
    pub fn within(&self, size: i32) -> bool {
        self.x >= 1 && self.y >= 1 && self.x <= size && self.y <= size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction for movement.
///
/// The board's first axis grows "south": North is `x - 1` and East is `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
    #[serde(rename = "North-East")]
    NorthEast,
    #[serde(rename = "South-East")]
    SouthEast,
    #[serde(rename = "South-West")]
    SouthWest,
    #[serde(rename = "North-West")]
    NorthWest,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::SouthWest,
            Direction::NorthWest,
        ]
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::SouthEast | Direction::SouthWest | Direction::NorthWest
        )
    }

    /// Long-form name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::NorthEast => "North-East",
            Direction::SouthEast => "South-East",
            Direction::SouthWest => "South-West",
            Direction::NorthWest => "North-West",
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of insect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Butterfly,
    Ant,
    Spider,
    Grasshopper,
}

impl Species {
    pub fn all() -> [Species; 4] {
        [
            Species::Butterfly,
            Species::Ant,
            Species::Spider,
            Species::Grasshopper,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Butterfly => "Butterfly",
            Species::Ant => "Ant",
            Species::Spider => "Spider",
            Species::Grasshopper => "Grasshopper",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::all()
            .into_iter()
            .find(|species| species.name() == s)
            .ok_or(Error::InvalidInsectType)
    }
}

/// Insect color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub fn all() -> [Color; 4] {
        [Color::Red, Color::Green, Color::Blue, Color::Yellow]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::all()
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or(Error::InvalidInsectColor)
    }
}

/// Anything that can sit on a board cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Food { amount: u32 },
    Insect {
        species: Species,
        color: Color,
        position: Position,
    },
}

impl Entity {
    pub fn food(amount: u32) -> Self {
        Entity::Food { amount }
    }

    pub fn insect(species: Species, color: Color, position: Position) -> Self {
        Entity::Insect {
            species,
            color,
            position,
        }
    }

    pub fn is_food(&self) -> bool {
        matches!(self, Entity::Food { .. })
    }
}
