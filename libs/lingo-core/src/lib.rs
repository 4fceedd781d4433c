//! Core library for the French vocabulary app.
//!
//! Provides:
//! - Matching game engine (rounds of six word pairs, tile selection, scoring)
//! - Built-in vocabulary catalog and lessons
//! - User progress, preferences and game history
//! - Key-value JSON blob store for persisting user state

pub mod error;
pub mod progress;
pub mod round;
pub mod session;
pub mod store;
pub mod types;
pub mod vocabulary;

pub use error::{GameError, Result, StoreError};
pub use progress::{
    GameScore, GameType, PreferencesUpdate, ProgressRecorder, ProgressUpdate, UserPreferences,
    UserProgress, UserState,
};
pub use round::Round;
pub use session::{GameSession, SessionListener};
pub use store::{JsonFileStore, MemoryStore, StateStore};
pub use types::{
    GameOutcome, Phase, Selection, Side, Tile, TileId, WordPair, POINTS_PER_MATCH, ROUND_SIZE,
};
pub use vocabulary::{Catalog, Category, Difficulty, Lesson, VocabularyEntry};
