//! Building a validated board from an input document.
//!
//! The document is a whitespace separated token stream:
//!
//! ```text
//! <board size>
//! <insect count>
//! <food count>
//! <Color> <Species> <x> <y>     one line per insect
//! <amount> <x> <y>              one line per food deposit
//! ```
//!
//! Checks run in document order and the first failure wins, so the error
//! reported for a broken document is deterministic.

use crate::board::Board;
use crate::insect::Insect;
use crate::simulation::Simulation;
use forage_core::{BoardLimits, Color, Entity, Error, Position, Result, Species};
use std::str::{FromStr, SplitWhitespace};
use tracing::debug;

/// Incrementally places entities on a board, enforcing placement rules
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    board: Board,
    insects: Vec<Insect>,
}

impl BoardBuilder {
    pub fn new(size: i32, limits: &BoardLimits) -> Result<Self> {
        if !limits.board_sizes().contains(&size) {
            return Err(Error::InvalidBoardSize);
        }
        Ok(Self {
            board: Board::new(size),
            insects: Vec::new(),
        })
    }

    fn check_position(&self, pos: Position) -> Result<()> {
        if !self.board.contains(pos) {
            return Err(Error::InvalidEntityPosition);
        }
        Ok(())
    }

    pub fn add_insect(&mut self, species: Species, color: Color, pos: Position) -> Result<()> {
        self.check_position(pos)?;
        let insect = Insect::new(self.insects.len(), species, color, pos);
        if self.insects.iter().any(|other| other.same_kind(&insect)) {
            return Err(Error::DuplicateInsects);
        }
        if self.board.is_occupied(pos) {
            return Err(Error::TwoEntitiesOnSamePosition);
        }
        self.board.insert(pos, insect.to_entity());
        self.insects.push(insect);
        Ok(())
    }

    pub fn add_food(&mut self, amount: u32, pos: Position) -> Result<()> {
        self.check_position(pos)?;
        if self.board.is_occupied(pos) {
            return Err(Error::TwoEntitiesOnSamePosition);
        }
        self.board.insert(pos, Entity::food(amount));
        Ok(())
    }

    pub fn build(self) -> Simulation {
        Simulation::new(self.board, self.insects)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| Error::Malformed(format!("expected {what}, found end of input")))
    }

    fn number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.word(what)?;
        token
            .parse()
            .map_err(|_| Error::Malformed(format!("expected {what}, found `{token}`")))
    }
}

/// Parse and validate an input document into a ready-to-run simulation
pub fn parse(input: &str, limits: &BoardLimits) -> Result<Simulation> {
    let mut tokens = Tokens::new(input);

    let size: i32 = tokens.number("board size")?;
    let mut builder = BoardBuilder::new(size, limits)?;

    let insect_count: usize = tokens.number("insect count")?;
    if !limits.insects().contains(&insect_count) {
        return Err(Error::InvalidNumberOfInsects);
    }

    let food_count: usize = tokens.number("food count")?;
    if !limits.food_points().contains(&food_count) {
        return Err(Error::InvalidNumberOfFoodPoints);
    }

    for _ in 0..insect_count {
        let color = tokens.word("insect color")?;
        let species = tokens.word("insect type")?;
        let pos = Position::new(tokens.number("x coordinate")?, tokens.number("y coordinate")?);

        // Position is checked before the names are.
        builder.check_position(pos)?;
        let color: Color = color.parse()?;
        let species: Species = species.parse()?;
        builder.add_insect(species, color, pos)?;
    }

    for _ in 0..food_count {
        let amount: u32 = tokens.number("food amount")?;
        let pos = Position::new(tokens.number("x coordinate")?, tokens.number("y coordinate")?);
        builder.add_food(amount, pos)?;
    }

    debug!(size, insect_count, food_count, "input parsed");
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(input: &str) -> Result<Simulation> {
        parse(input, &BoardLimits::default())
    }

    fn error_message(input: &str) -> String {
        match parse_default(input) {
            Ok(_) => panic!("input was accepted"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_document() {
        let sim = parse_default("4\n2\n1\nRed Butterfly 2 2\nBlue Ant 1 1\n5 2 4\n").unwrap();
        assert_eq!(sim.board().size(), 4);
        assert_eq!(sim.insects().len(), 2);
        assert_eq!(sim.insects()[1].species, Species::Ant);
        assert_eq!(sim.insects()[1].index, 1);
        assert_eq!(sim.board().get(Position::new(2, 4)), Some(&Entity::food(5)));
    }

    #[test]
    fn test_count_errors() {
        assert_eq!(error_message("3\n1\n1\n"), "Invalid board size");
        assert_eq!(error_message("1001\n1\n1\n"), "Invalid board size");
        assert_eq!(error_message("4\n0\n1\n"), "Invalid number of insects");
        assert_eq!(error_message("4\n17\n1\n"), "Invalid number of insects");
        assert_eq!(error_message("4\n1\n201\n"), "Invalid number of food points");
    }

    #[test]
    fn test_position_checked_before_names() {
        assert_eq!(error_message("4\n1\n1\nPurple Moth 5 1\n1 1 1\n"), "Invalid entity position");
        assert_eq!(error_message("4\n1\n1\nPurple Ant 1 1\n1 2 2\n"), "Invalid insect color");
        assert_eq!(error_message("4\n1\n1\nRed Moth 1 1\n1 2 2\n"), "Invalid insect type");
    }

    #[test]
    fn test_duplicate_checked_before_collision() {
        assert_eq!(
            error_message("4\n2\n1\nRed Ant 1 1\nRed Ant 1 1\n1 2 2\n"),
            "Duplicate insects"
        );
        assert_eq!(
            error_message("4\n2\n1\nRed Ant 1 1\nBlue Ant 1 1\n1 2 2\n"),
            "Two entities in the same position"
        );
    }

    #[test]
    fn test_food_errors() {
        assert_eq!(error_message("4\n1\n1\nRed Ant 1 1\n3 0 2\n"), "Invalid entity position");
        assert_eq!(
            error_message("4\n1\n1\nRed Ant 1 1\n3 1 1\n"),
            "Two entities in the same position"
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(parse_default("four"), Err(Error::Malformed(_))));
        assert!(matches!(parse_default("4\n1\n1\nRed Ant 1"), Err(Error::Malformed(_))));
        assert!(matches!(
            parse_default("4\n1\n1\nRed Ant 1 1\n-3 2 2\n"),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn test_custom_limits() {
        let limits = BoardLimits {
            max_insects: 1,
            ..Default::default()
        };
        let err = parse("4\n2\n1\n", &limits).unwrap_err();
        assert!(matches!(err, Error::InvalidNumberOfInsects));
    }

    #[test]
    fn test_builder_rejects_out_of_range_size() {
        assert!(matches!(
            BoardBuilder::new(2, &BoardLimits::default()),
            Err(Error::InvalidBoardSize)
        ));
    }
}
