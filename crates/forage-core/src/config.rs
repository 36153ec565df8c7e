//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Bounds an input document must respect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLimits {
    /// Smallest accepted board side
    pub min_board_size: i32,
    /// Largest accepted board side
    pub max_board_size: i32,
    pub min_insects: usize,
    pub max_insects: usize,
    pub min_food_points: usize,
    pub max_food_points: usize,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            min_board_size: 4,
            max_board_size: 1000,
            min_insects: 1,
            max_insects: 16,
            min_food_points: 1,
            max_food_points: 200,
        }
    }
}

impl BoardLimits {
    pub fn board_sizes(&self) -> RangeInclusive<i32> {
        self.min_board_size..=self.max_board_size
    }

    pub fn insects(&self) -> RangeInclusive<usize> {
        self.min_insects..=self.max_insects
    }

    pub fn food_points(&self) -> RangeInclusive<usize> {
        self.min_food_points..=self.max_food_points
    }

    /// Reject bounds that no document could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.min_board_size < 1 {
            return Err(Error::InvalidLimits(format!(
                "min_board_size must be at least 1, got {}",
                self.min_board_size
            )));
        }
        if self.board_sizes().is_empty() {
            return Err(Error::InvalidLimits(format!(
                "board size range {}..={} is empty",
                self.min_board_size, self.max_board_size
            )));
        }
        if self.insects().is_empty() {
            return Err(Error::InvalidLimits(format!(
                "insect range {}..={} is empty",
                self.min_insects, self.max_insects
            )));
        }
        if self.food_points().is_empty() {
            return Err(Error::InvalidLimits(format!(
                "food point range {}..={} is empty",
                self.min_food_points, self.max_food_points
            )));
        }
        Ok(())
    }
}

/// Parameters for the random board generator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Side length of the generated board
    pub board_size: i32,
    /// Number of insects to place (at most one per species/color pair)
    pub insect_count: usize,
    /// Number of food deposits to place
    pub food_count: usize,
    /// Upper bound for a single deposit's amount
    pub max_food_amount: u32,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            insect_count: 4,
            food_count: 20,
            max_food_amount: 10,
            seed: 0,
        }
    }
}

/// How results are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `<Color> <Species> <Direction> <eaten>` line per insect
    #[default]
    Text,
    Json,
}

/// Configuration of a single simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub format: ReportFormat,
    pub limits: BoardLimits,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: "input.txt".to_string(),
            output_path: "output.txt".to_string(),
            format: ReportFormat::Text,
            limits: BoardLimits::default(),
        }
    }
}
