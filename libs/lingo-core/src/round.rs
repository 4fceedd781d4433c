//! Splitting a word list into rounds and dealing tiles for a round.

use crate::error::{GameError, Result};
use crate::types::{Side, Tile, WordPair, ROUND_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A chunk of at most [`ROUND_SIZE`] word pairs played as one sub-game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub index: usize,
    pub words: Vec<WordPair>,
    pub completed: bool,
    pub score: u32,
    pub mistakes: u32,
}

impl Round {
    fn new(index: usize, words: Vec<WordPair>) -> Self {
        Self {
            index,
            words,
            completed: false,
            score: 0,
            mistakes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Check that a word list can be played.
pub fn validate(words: &[WordPair]) -> Result<()> {
    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }

    let mut seen_ids = HashSet::new();
    for (index, word) in words.iter().enumerate() {
        let blank = if word.id.trim().is_empty() {
            Some("blank id")
        } else if word.source_text.trim().is_empty() {
            Some("blank source text")
        } else if word.target_text.trim().is_empty() {
            Some("blank target text")
        } else {
            None
        };
        if let Some(reason) = blank {
            return Err(GameError::MalformedWordPair {
                index,
                reason: reason.to_string(),
            });
        }
        if !seen_ids.insert(word.id.as_str()) {
            return Err(GameError::DuplicateWordId {
                id: word.id.clone(),
                index,
            });
        }
    }

    Ok(())
}

/// Split `words` into consecutive rounds, preserving order.
/// The last round holds the remainder and may be smaller.
pub fn partition(words: &[WordPair]) -> Vec<Round> {
    words
        .chunks(ROUND_SIZE)
        .enumerate()
        .map(|(index, chunk)| Round::new(index, chunk.to_vec()))
        .collect()
}

/// Deal both tiles of every pair in `round` and shuffle them together.
pub fn deal_tiles<R: Rng + ?Sized>(round: &Round, rng: &mut R) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = round
        .words
        .iter()
        .map(|word| Tile::from_pair(word, Side::Source))
        .chain(round.words.iter().map(|word| Tile::from_pair(word, Side::Target)))
        .collect();
    tiles.shuffle(rng);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn words(n: usize) -> Vec<WordPair> {
        (0..n)
            .map(|i| WordPair::new(format!("w{}", i), format!("mot {}", i), format!("word {}", i)))
            .collect()
    }

    #[test]
    fn round_count_is_ceiling_of_chunks() {
        for n in 1..=25 {
            let rounds = partition(&words(n));
            assert_eq!(rounds.len(), (n + ROUND_SIZE - 1) / ROUND_SIZE, "n = {}", n);
        }
    }

    #[test]
    fn rounds_reconstruct_input_in_order() {
        let input = words(14);
        let rounds = partition(&input);
        let flattened: Vec<WordPair> = rounds.iter().flat_map(|r| r.words.clone()).collect();
        assert_eq!(flattened, input);
        assert_eq!(
            rounds.iter().map(Round::len).collect::<Vec<_>>(),
            vec![6, 6, 2]
        );
        assert_eq!(rounds[2].index, 2);
    }

    #[test]
    fn seven_words_make_rounds_of_six_and_one() {
        let rounds = partition(&words(7));
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].len(), 6);
        assert_eq!(rounds[1].len(), 1);
    }

    #[test]
    fn dealt_tiles_have_one_per_side_per_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let round = &partition(&words(5))[0];
        let tiles = deal_tiles(round, &mut rng);
        assert_eq!(tiles.len(), 10);

        let mut sides: HashMap<&str, Vec<Side>> = HashMap::new();
        for tile in &tiles {
            sides.entry(tile.pair_id.as_str()).or_default().push(tile.side);
            assert!(!tile.matched);
            assert!(!tile.selected);
        }
        assert_eq!(sides.len(), 5);
        for pair_sides in sides.values() {
            assert_eq!(pair_sides.len(), 2);
            assert!(pair_sides.contains(&Side::Source));
            assert!(pair_sides.contains(&Side::Target));
        }
    }

    #[test]
    fn shuffle_produces_different_orders() {
        let round = &partition(&words(6))[0];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let orders: HashSet<Vec<String>> = (0..20)
            .map(|_| {
                deal_tiles(round, &mut rng)
                    .into_iter()
                    .map(|t| t.id.to_string())
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn shuffle_mixes_sides() {
        // Over many deals, a target tile must sometimes land in the first slot.
        let round = &partition(&words(6))[0];
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let target_first = (0..50)
            .filter(|_| deal_tiles(round, &mut rng)[0].side == Side::Target)
            .count();
        assert!(target_first > 0);
        assert!(target_first < 50);
    }

    #[test]
    fn reject_empty_list() {
        assert_eq!(validate(&[]), Err(GameError::EmptyWordList));
    }

    #[test]
    fn reject_blank_text() {
        let input = vec![WordPair::new("a", "Chat", "Cat"), WordPair::new("b", "  ", "Dog")];
        assert!(matches!(
            validate(&input),
            Err(GameError::MalformedWordPair { index: 1, .. })
        ));
    }

    #[test]
    fn reject_duplicate_ids() {
        let input = vec![WordPair::new("a", "Chat", "Cat"), WordPair::new("a", "Chien", "Dog")];
        assert_eq!(
            validate(&input),
            Err(GameError::DuplicateWordId {
                id: "a".to_string(),
                index: 1
            })
        );
    }

    #[test]
    fn accept_well_formed_list() {
        assert!(validate(&words(3)).is_ok());
    }
}
