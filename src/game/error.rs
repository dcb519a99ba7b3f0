use std::io;

use thiserror::Error;

use super::globals::Token;

/// Broad classes of failure, so callers can react without matching every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A square or deed looked up by name doesn't exist.
    NotFound,
    /// The game was set up with parameters it can't be played with.
    InvalidConfiguration,
    /// A board position outside the board was requested.
    OutOfRange,
    /// Narration couldn't be written to the output sink.
    Io,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no square named `{0}` exists on the board")]
    SquareNotFound(String),

    #[error("player {player} doesn't own a deed named `{deed}`")]
    DeedNotFound { player: Token, deed: String },

    #[error("there is no player number {0}")]
    PlayerNotFound(usize),

    #[error("no unowned deed is left for the square `{0}`")]
    UnownedDeedNotFound(String),

    #[error("board position {index} is outside a board of {size} squares")]
    PositionOutOfRange { index: usize, size: usize },

    #[error("square `{0}` charges tax but has no tax amount")]
    NotATaxSquare(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to write narration: {0}")]
    Narration(#[from] io::Error),
}

impl GameError {
    /// Which class of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::SquareNotFound(_)
            | GameError::DeedNotFound { .. }
            | GameError::PlayerNotFound(_)
            | GameError::UnownedDeedNotFound(_) => ErrorKind::NotFound,
            GameError::PositionOutOfRange { .. } => ErrorKind::OutOfRange,
            GameError::NotATaxSquare(_) | GameError::InvalidConfiguration(_) => {
                ErrorKind::InvalidConfiguration
            }
            GameError::Narration(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
