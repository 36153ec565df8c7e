//! Random input documents for experiments and tests.

use forage_core::{BoardLimits, Color, GeneratorConfig, Position, Result, Species};
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::debug;

/// Produce a valid input document from the generator configuration.
///
/// Counts are clamped to `limits` and to the free cells of the board; the
/// same seed always yields the same document. Fails only when `limits`
/// itself is unsatisfiable.
pub fn generate(config: &GeneratorConfig, limits: &BoardLimits) -> Result<String> {
    limits.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let size = config
        .board_size
        .clamp(limits.min_board_size, limits.max_board_size);
    let cells = (size as usize) * (size as usize);

    let mut kinds: Vec<(Color, Species)> = Color::all()
        .into_iter()
        .flat_map(|color| Species::all().into_iter().map(move |species| (color, species)))
        .collect();
    kinds.shuffle(&mut rng);

    let insect_count = config
        .insect_count
        .clamp(limits.min_insects, limits.max_insects)
        .min(kinds.len())
        .min(cells.saturating_sub(limits.min_food_points));
    let food_count = config
        .food_count
        .clamp(limits.min_food_points, limits.max_food_points)
        .min(cells.saturating_sub(insect_count));

    let mut taken = HashSet::new();
    let mut free_cell = |rng: &mut ChaCha8Rng| loop {
        let pos = Position::new(rng.gen_range(1..=size), rng.gen_range(1..=size));
        if taken.insert(pos) {
            return pos;
        }
    };

    let mut doc = format!("{size}\n{insect_count}\n{food_count}\n");
    for &(color, species) in kinds.iter().take(insect_count) {
        let pos = free_cell(&mut rng);
        doc.push_str(&format!("{color} {species} {} {}\n", pos.x, pos.y));
    }
    for _ in 0..food_count {
        let pos = free_cell(&mut rng);
        let amount = rng.gen_range(1..=config.max_food_amount.max(1));
        doc.push_str(&format!("{amount} {} {}\n", pos.x, pos.y));
    }

    debug!(seed = config.seed, size, insect_count, food_count, "board generated");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup;

    #[test]
    fn test_generated_document_is_valid() {
        let limits = BoardLimits::default();
        let config = GeneratorConfig {
            board_size: 12,
            insect_count: 10,
            food_count: 50,
            max_food_amount: 9,
            seed: 42,
        };

        let doc = generate(&config, &limits).unwrap();
        let sim = setup::parse(&doc, &limits).unwrap();
        assert_eq!(sim.board().size(), 12);
        assert_eq!(sim.insects().len(), 10);
        assert_eq!(sim.board().len(), 60);
    }

    #[test]
    fn test_same_seed_same_document() {
        let limits = BoardLimits::default();
        let config = GeneratorConfig {
            seed: 7,
            ..Default::default()
        };
        assert_eq!(
            generate(&config, &limits).unwrap(),
            generate(&config, &limits).unwrap()
        );

        let other = GeneratorConfig {
            seed: 8,
            ..Default::default()
        };
        assert_ne!(
            generate(&config, &limits).unwrap(),
            generate(&other, &limits).unwrap()
        );
    }

    #[test]
    fn test_counts_are_clamped() {
        let limits = BoardLimits::default();
        let config = GeneratorConfig {
            board_size: 2,
            insect_count: 40,
            food_count: 500,
            ..Default::default()
        };

        let doc = generate(&config, &limits).unwrap();
        let sim = setup::parse(&doc, &limits).unwrap();
        assert_eq!(sim.board().size(), 4);
        // One cell of the 4x4 board is kept for the single required deposit.
        assert_eq!(sim.insects().len(), 15);
        assert_eq!(sim.board().len(), 16);
    }

    #[test]
    fn test_inverted_limits_are_rejected() {
        let limits: BoardLimits = serde_json::from_str(r#"{ "min_insects": 20 }"#).unwrap();
        let err = generate(&GeneratorConfig::default(), &limits).unwrap_err();
        assert!(matches!(err, forage_core::Error::InvalidLimits(_)));

        let limits = BoardLimits {
            min_board_size: 0,
            max_board_size: 0,
            ..Default::default()
        };
        assert!(generate(&GeneratorConfig::default(), &limits).is_err());
    }

    #[test]
    fn test_food_minimum_larger_than_board() {
        let limits = BoardLimits {
            min_food_points: 150,
            ..Default::default()
        };
        let config = GeneratorConfig {
            board_size: 4,
            ..Default::default()
        };

        let doc = generate(&config, &limits).unwrap();
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some("4"));
        assert_eq!(lines.next(), Some("0"));
        assert_eq!(lines.next(), Some("16"));
        assert_eq!(doc.lines().count(), 3 + 16);
    }
}
