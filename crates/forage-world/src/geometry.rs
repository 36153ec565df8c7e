//! Per-species movement geometry.
//!
//! Each species is described by a [`Movement`] record: which directions it
//! may take, the order in which candidate directions are compared, and how
//! many cells one step covers. The scanner and policy are generic over it.

use forage_core::{Direction, Error, Result, Species};

use Direction::*;

/// Movement capability of a species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub species: Species,
    /// Candidate order for tie-breaking; the first entry is the default
    pub compare_order: &'static [Direction],
    /// Order in which directions are scanned
    pub eval_order: &'static [Direction],
    /// Cells covered by one step
    pub stride: i32,
}

const BUTTERFLY: Movement = Movement {
    species: Species::Butterfly,
    compare_order: &[North, East, South, West],
    eval_order: &[North, East, South, West],
    stride: 1,
};

const ANT: Movement = Movement {
    species: Species::Ant,
    compare_order: &[North, East, South, West, NorthEast, SouthEast, SouthWest, NorthWest],
    eval_order: &[North, East, South, West, NorthWest, NorthEast, SouthWest, SouthEast],
    stride: 1,
};

const SPIDER: Movement = Movement {
    species: Species::Spider,
    compare_order: &[NorthEast, SouthEast, SouthWest, NorthWest],
    eval_order: &[NorthWest, NorthEast, SouthWest, SouthEast],
    stride: 1,
};

const GRASSHOPPER: Movement = Movement {
    species: Species::Grasshopper,
    compare_order: &[North, East, South, West],
    eval_order: &[West, East, North, South],
    stride: 2,
};

impl Movement {
    pub fn of(species: Species) -> &'static Movement {
        match species {
            Species::Butterfly => &BUTTERFLY,
            Species::Ant => &ANT,
            Species::Spider => &SPIDER,
            Species::Grasshopper => &GRASSHOPPER,
        }
    }

    /// Direction chosen when nothing scores above zero
    pub fn default_direction(&self) -> Direction {
        self.compare_order[0]
    }

    pub fn supports(&self, direction: Direction) -> bool {
        self.compare_order.contains(&direction)
    }

    /// Step vector for `direction`, scaled by the species' stride
    pub fn step(&self, direction: Direction) -> Result<(i32, i32)> {
        if !self.supports(direction) {
            return Err(Error::UnsupportedDirection {
                species: self.species,
                direction,
            });
        }
        let (dx, dy) = direction.to_delta();
        Ok((dx * self.stride, dy * self.stride))
    }
}

pub fn step_vector(species: Species, direction: Direction) -> Result<(i32, i32)> {
    Movement::of(species).step(direction)
}
