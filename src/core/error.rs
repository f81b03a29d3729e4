use thiserror::Error;

use crate::core::definitions::Location;

/// Errors raised while setting up, searching or playing a game
#[derive(Error, Debug)]
pub enum Error {
    #[error("Location out of the grid: ring {ring}, sector {sector}")]
    InvalidLocation { ring: usize, sector: usize },

    #[error("Ply limit {plies} is above the supported maximum of {max}")]
    InvalidPlyLimit { plies: u8, max: u8 },

    #[error("No legal targets were offered")]
    NoLegalTargets,

    #[error("Search found no playable move")]
    NoMoveFound,

    #[error("Illegal move at {0}")]
    IllegalMove(Location),

    #[error("Board holds an illegal-move marker at {0}")]
    CorruptBoard(Location),

    #[error("Game is already over")]
    GameOver,

    #[error("Input closed before a legal move was entered")]
    InputClosed,

    #[error("Setup channel closed before a configuration arrived")]
    SetupAborted,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
