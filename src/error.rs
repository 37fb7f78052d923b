//! Error types for registration and card submission.
//!
//! None of these are fatal: they are logged and, where a client is waiting,
//! answered with an `error` message carrying [`code`](SubmissionError::code).

use thiserror::Error;

use crate::game::types::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Both teams are full")]
    TeamsFull,
}

impl RegistrationError {
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::TeamsFull => "TEAMS_FULL",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("No round is collecting cards")]
    NotCollecting,
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("Player {0} was not dealt a hand this round")]
    NoHand(PlayerId),
    #[error("Player {0} already submitted this round")]
    AlreadySubmitted(PlayerId),
    #[error("Expected {expected} cards, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("Card index {0} is outside the hand")]
    IndexOutOfRange(usize),
    #[error("Card index {0} was chosen more than once")]
    DuplicateIndex(usize),
}

impl SubmissionError {
    pub fn code(&self) -> &'static str {
        match self {
            SubmissionError::NotCollecting => "NOT_COLLECTING",
            SubmissionError::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            SubmissionError::NoHand(_) => "NO_HAND",
            SubmissionError::AlreadySubmitted(_) => "ALREADY_SUBMITTED",
            SubmissionError::WrongCount { .. } => "WRONG_CARD_COUNT",
            SubmissionError::IndexOutOfRange(_) => "INDEX_OUT_OF_RANGE",
            SubmissionError::DuplicateIndex(_) => "DUPLICATE_INDEX",
        }
    }
}
