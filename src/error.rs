//! Error types for the Reversi engine

use thiserror::Error;

use crate::board::{Pos, Side};

/// Errors surfaced by the rules engine, the agents and the game loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move is not in the legal set for the side
    #[error("illegal move {pos} for {side}")]
    InvalidMove { pos: Pos, side: Side },

    /// Coordinate outside the board
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// An agent was asked to move from a position without legal moves
    #[error("{side} has no legal move")]
    NoLegalMoves { side: Side },

    #[error("game already over")]
    GameOver,

    #[error("{side} is human-controlled but no input source was provided")]
    MissingHumanInput { side: Side },

    /// The human input source stopped producing moves
    #[error("game abandoned by {side}")]
    Abandoned { side: Side },
}

pub type Result<T> = std::result::Result<T, GameError>;
