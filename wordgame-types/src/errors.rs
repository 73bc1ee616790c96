use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Rejections a session can return for a guess. All of them are
/// recoverable: the session state is left untouched and the player
/// may try again immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessError {
    #[error("guess must contain only letters")]
    InvalidInput,
    #[error("letter already guessed")]
    DuplicateGuess,
    #[error("the game is already over")]
    AlreadyGameOver,
}
