//! Core types shared by the matching engine and its collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of word pairs played per round.
pub const ROUND_SIZE: usize = 6;

/// Points awarded for each correct match.
pub const POINTS_PER_MATCH: u32 = 10;

/// One vocabulary item: a French word and its English meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub id: String,
    pub source_text: String,
    pub target_text: String,
}

impl WordPair {
    pub fn new(
        id: impl Into<String>,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Which language a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// French.
    Source,
    /// English.
    Target,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Source,
        }
    }
}

/// Identifier of a tile within the current round.
///
/// Formatted as `<side>-<pair id>`, so it is unique as long as pair ids are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    pub fn new(side: Side, pair_id: &str) -> Self {
        Self(format!("{}-{}", side.as_str(), pair_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One side of a word pair, as displayed during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub text: String,
    pub side: Side,
    pub matched: bool,
    pub selected: bool,
    pub pair_id: String,
}

impl Tile {
    pub fn from_pair(pair: &WordPair, side: Side) -> Self {
        let text = match side {
            Side::Source => pair.source_text.clone(),
            Side::Target => pair.target_text.clone(),
        };
        Self {
            id: TileId::new(side, &pair.id),
            text,
            side,
            matched: false,
            selected: false,
            pair_id: pair.id.clone(),
        }
    }

    /// Whether this tile and `other` are the two halves of one word pair.
    pub fn matches(&self, other: &Tile) -> bool {
        self.pair_id == other.pair_id && self.side != other.side
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Playing,
    Completed,
    Abandoned,
}

impl Phase {
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Final result reported when the last pair of the last round is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub score: u32,
    pub time_spent_seconds: u64,
    pub mistakes: u32,
    /// Number of word pairs matched over the whole session.
    pub pairs: u32,
    pub finished_at: DateTime<Utc>,
}

impl GameOutcome {
    /// Percentage of match attempts that were correct.
    pub fn accuracy(&self) -> f64 {
        let attempts = self.pairs + self.mistakes;
        if attempts == 0 {
            return 100.0;
        }
        f64::from(self.pairs) / f64::from(attempts) * 100.0
    }
}

/// What a single tile press did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The tile was already matched; nothing changed.
    Ignored,
    /// The tile is now the pending selection.
    Selected(TileId),
    /// The pending tile was pressed again and is no longer selected.
    Deselected(TileId),
    /// A pair was matched and the round continues.
    Matched { first: TileId, second: TileId },
    /// Two tiles that do not belong together were picked.
    Mismatch { first: TileId, second: TileId },
    /// The match finished the round; `next_round` is now being played.
    RoundCompleted { next_round: usize },
    /// The match finished the last round.
    GameCompleted(GameOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_ids_are_prefixed_by_side() {
        assert_eq!(TileId::new(Side::Source, "g1").as_str(), "source-g1");
        assert_eq!(TileId::new(Side::Target, "g1").to_string(), "target-g1");
    }

    #[test]
    fn tiles_match_only_across_sides() {
        let pair = WordPair::new("c1", "Rouge", "Red");
        let source = Tile::from_pair(&pair, Side::Source);
        let target = Tile::from_pair(&pair, Side::Target);
        assert!(source.matches(&target));
        assert!(target.matches(&source));
        assert!(!source.matches(&source.clone()));
    }

    #[test]
    fn same_text_on_same_side_never_matches() {
        let a = Tile::from_pair(&WordPair::new("n6", "Six", "Six"), Side::Source);
        let b = Tile::from_pair(&WordPair::new("n6", "Six", "Six"), Side::Source);
        assert!(!a.matches(&b));
    }

    #[test]
    fn accuracy_counts_mistakes() {
        let outcome = GameOutcome {
            score: 30,
            time_spent_seconds: 12,
            mistakes: 1,
            pairs: 3,
            finished_at: Utc::now(),
        };
        assert_eq!(outcome.accuracy(), 75.0);
    }

    #[test]
    fn accuracy_without_attempts_is_full() {
        let outcome = GameOutcome {
            score: 0,
            time_spent_seconds: 0,
            mistakes: 0,
            pairs: 0,
            finished_at: Utc::now(),
        };
        assert_eq!(outcome.accuracy(), 100.0);
    }

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Phase::Completed).unwrap(), "\"completed\"");
    }
}
