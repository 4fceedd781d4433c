//! Matching game session.
//!
//! A session deals the tiles of one round at a time. The player presses
//! tiles; two presses on the French and English halves of the same word pair
//! form a match. When every pair of a round is matched the next round is
//! dealt, and when the last round is done the session reports its outcome to
//! the [`SessionListener`].
//!
//! The session is a plain state machine:
//!
//! ```text
//! Playing(round, selection?) --last pair of last round--> Completed
//! Playing(round, selection?) --exit-------------------> Abandoned
//! ```
//!
//! Mismatch feedback (shaking tiles, delays) belongs to the host. The
//! session clears the selection as soon as a mismatch is detected and hands
//! both tile ids back in [`Selection::Mismatch`] so the host can animate them.

use crate::error::{GameError, Result};
use crate::round::{deal_tiles, partition, validate, Round};
use crate::types::{GameOutcome, Phase, Selection, Side, Tile, TileId, WordPair, POINTS_PER_MATCH};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Receives the end of a session. At most one of the two methods is called,
/// at most once.
pub trait SessionListener {
    /// The last pair of the last round was matched.
    fn on_complete(&mut self, outcome: GameOutcome);

    /// The player left before finishing.
    fn on_exit(&mut self);
}

impl SessionListener for () {
    fn on_complete(&mut self, _outcome: GameOutcome) {}

    fn on_exit(&mut self) {}
}

/// A multi-round matching game from start to completion or exit.
#[derive(Debug)]
pub struct GameSession<L, R = StdRng> {
    id: Uuid,
    rounds: Vec<Round>,
    current_round: usize,
    tiles: Vec<Tile>,
    selected: Option<usize>,
    score: u32,
    mistakes: u32,
    pairs_matched: u32,
    started_at: DateTime<Utc>,
    phase: Phase,
    listener: L,
    rng: R,
}

impl<L: SessionListener> GameSession<L, StdRng> {
    /// Start a session with an entropy-seeded shuffle and the current time.
    pub fn start(words: &[WordPair], listener: L) -> Result<Self> {
        Self::start_with(words, listener, StdRng::from_entropy(), Utc::now())
    }
}

impl<L: SessionListener, R: Rng> GameSession<L, R> {
    /// Start a session with an explicit random source and start time.
    pub fn start_with(words: &[WordPair], listener: L, mut rng: R, now: DateTime<Utc>) -> Result<Self> {
        validate(words)?;

        let rounds = partition(words);
        let tiles = deal_tiles(&rounds[0], &mut rng);
        let id = Uuid::new_v4();

        tracing::debug!(
            session = %id,
            words = words.len(),
            rounds = rounds.len(),
            "matching session started"
        );

        Ok(Self {
            id,
            rounds,
            current_round: 0,
            tiles,
            selected: None,
            score: 0,
            mistakes: 0,
            pairs_matched: 0,
            started_at: now,
            phase: Phase::Playing,
            listener,
            rng,
        })
    }

    /// Press a tile of the current round.
    pub fn select_tile(&mut self, tile_id: &TileId) -> Result<Selection> {
        self.select_tile_at(tile_id, Utc::now())
    }

    /// Press a tile, using `now` as the time if this finishes the game.
    pub fn select_tile_at(&mut self, tile_id: &TileId, now: DateTime<Utc>) -> Result<Selection> {
        if self.phase.is_finished() {
            return Err(GameError::SessionFinished);
        }

        let index = self
            .tiles
            .iter()
            .position(|tile| &tile.id == tile_id)
            .ok_or_else(|| GameError::UnknownTile(tile_id.clone()))?;

        if self.tiles[index].matched {
            return Ok(Selection::Ignored);
        }

        let Some(pending) = self.selected.take() else {
            self.tiles[index].selected = true;
            self.selected = Some(index);
            return Ok(Selection::Selected(tile_id.clone()));
        };

        self.tiles[pending].selected = false;
        if pending == index {
            return Ok(Selection::Deselected(tile_id.clone()));
        }

        let first = self.tiles[pending].id.clone();
        let second = self.tiles[index].id.clone();

        if !self.tiles[pending].matches(&self.tiles[index]) {
            self.mistakes += 1;
            self.rounds[self.current_round].mistakes += 1;
            tracing::debug!(session = %self.id, %first, %second, "mismatch");
            return Ok(Selection::Mismatch { first, second });
        }

        self.tiles[pending].matched = true;
        self.tiles[index].matched = true;
        self.score += POINTS_PER_MATCH;
        self.pairs_matched += 1;
        self.rounds[self.current_round].score += POINTS_PER_MATCH;
        tracing::debug!(session = %self.id, %first, %second, score = self.score, "matched");

        if self.tiles.iter().all(|tile| tile.matched) {
            return Ok(self.finish_round(now));
        }

        Ok(Selection::Matched { first, second })
    }

    /// Abandon the session. Only allowed while playing.
    pub fn exit(&mut self) -> Result<()> {
        if self.phase.is_finished() {
            return Err(GameError::SessionFinished);
        }

        self.phase = Phase::Abandoned;
        self.selected = None;
        self.tiles.clear();
        tracing::info!(
            session = %self.id,
            round = self.current_round,
            score = self.score,
            "matching session abandoned"
        );
        self.listener.on_exit();
        Ok(())
    }

    fn finish_round(&mut self, now: DateTime<Utc>) -> Selection {
        self.rounds[self.current_round].completed = true;
        self.selected = None;

        let next_round = self.current_round + 1;
        if next_round < self.rounds.len() {
            self.current_round = next_round;
            self.tiles = deal_tiles(&self.rounds[next_round], &mut self.rng);
            tracing::debug!(session = %self.id, round = next_round, "round dealt");
            return Selection::RoundCompleted { next_round };
        }

        let elapsed = (now - self.started_at).num_seconds().max(0) as u64;
        let outcome = GameOutcome {
            score: self.score,
            time_spent_seconds: elapsed,
            mistakes: self.mistakes,
            pairs: self.pairs_matched,
            finished_at: now,
        };

        self.phase = Phase::Completed;
        self.tiles.clear();
        tracing::info!(
            session = %self.id,
            score = outcome.score,
            mistakes = outcome.mistakes,
            seconds = outcome.time_spent_seconds,
            "matching session completed"
        );
        self.listener.on_complete(outcome);
        Selection::GameCompleted(outcome)
    }
}

impl<L, R> GameSession<L, R> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Tiles of the current round, in dealt order. Empty once finished.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles of one side that are still waiting for a match.
    pub fn open_tiles(&self, side: Side) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(move |tile| tile.side == side && !tile.matched)
    }

    pub fn selected_tile(&self) -> Option<&Tile> {
        self.selected.map(|index| &self.tiles[index])
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round
    }

    pub fn current_round(&self) -> &Round {
        &self.rounds[self.current_round]
    }

    /// Pairs matched so far in the current round.
    pub fn round_matches(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.matched).count() / 2
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}
