//! Error types for lingo-core.

use crate::types::TileId;
use thiserror::Error;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by the matching engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("malformed word pair at index {index}: {reason}")]
    MalformedWordPair { index: usize, reason: String },

    #[error("duplicate word id {id} at index {index}")]
    DuplicateWordId { id: String, index: usize },

    #[error("tile {0} is not part of the current round")]
    UnknownTile(TileId),

    #[error("session is already finished")]
    SessionFinished,
}

/// Errors raised by state stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid key: {0:?}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn display_malformed_pair() {
        let error = GameError::MalformedWordPair {
            index: 3,
            reason: "blank source text".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "malformed word pair at index 3: blank source text"
        );
    }

    #[test]
    fn display_unknown_tile() {
        let error = GameError::UnknownTile(TileId::new(Side::Target, "g1"));
        assert_eq!(error.to_string(), "tile target-g1 is not part of the current round");
    }

    #[test]
    fn display_invalid_key() {
        let error = StoreError::InvalidKey("../etc".to_string());
        assert_eq!(error.to_string(), "invalid key: \"../etc\"");
    }
}
