//! Error types.
//!
//! Only construction and input submission can fail. Card draws, deck
//! exhaustion and eliminations are ordinary play and never surface here.

use thiserror::Error;

use crate::cards::FarmItem;

/// Game construction failed. Fatal: no game exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("must provide at least 1 player")]
    NoPlayers,
    #[error("must provide at most 4 player names, got {0}")]
    TooManyPlayers(usize),
    #[error("player {0} has an empty name")]
    EmptyName(usize),
}

/// A submitted choice was rejected.
///
/// Every variant except `Invariant` leaves the game untouched; the caller
/// re-prompts with the same prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("no input is pending")]
    NoPendingInput,
    #[error("invalid choice {choice}, expected one of {valid:?}")]
    InvalidChoice { choice: i32, valid: Vec<i32> },
    #[error("waiting on player {expected}, not player {got}")]
    NotYourTurn { expected: usize, got: usize },
    #[error("the game is over")]
    GameOver,
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl ChoiceError {
    /// Whether the caller can simply re-prompt.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChoiceError::Invariant(_))
    }
}

/// Broken engine invariant. Never expected in correct operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("player {player} stack {stack} has illegal shape {items:?}")]
    IllegalStack {
        player: usize,
        stack: usize,
        items: Vec<FarmItem>,
    },
    #[error("player {player} stack {stack} is empty")]
    EmptyStack { player: usize, stack: usize },
    #[error("stage {stage} does not take input")]
    StageTakesNoInput { stage: String },
    #[error("{card}: expected {expected} copies, found {found}")]
    CensusMismatch {
        card: String,
        expected: usize,
        found: usize,
    },
}
