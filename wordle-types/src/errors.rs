use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Validation failures from submitting a guess. All recoverable and
/// reported as values; a rejected guess leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessError {
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("word must be {expected} letters")]
    InvalidLength { expected: usize },
    #[error("'{word}' is not in the word list")]
    NotInWordList { word: String },
    #[error("'{word}' was already guessed")]
    DuplicateGuess { word: String },
}
