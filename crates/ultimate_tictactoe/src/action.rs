//! First-class action types for ultimate tic-tac-toe.
//!
//! Actions are domain events, not side effects. They represent the
//! player's intent and are applied by [`dispatch`](crate::dispatch).
//! The JSON form mirrors the action objects a host UI sends:
//! `{"type": "PLAY_SQUARE", "boardIndex": 4, "squareIndex": 0}`.

use super::Position;
use serde::{Deserialize, Serialize};

/// A single placement: which square of which local board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Local board to play on.
    pub board: Position,
    /// Square inside that board.
    pub square: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, square: Position) -> Self {
        Self { board, square }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.board.label(), self.square.label())
    }
}

impl From<Move> for Action {
    fn from(mv: Move) -> Self {
        Action::play(mv.board, mv.square)
    }
}

/// An input to the state container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Place the next player's mark.
    #[serde(rename_all = "camelCase")]
    PlaySquare {
        /// Local board to play on.
        board_index: Position,
        /// Square inside that board.
        square_index: Position,
    },
    /// Move the history pointer without touching the history.
    #[serde(rename_all = "camelCase")]
    TimeTravel {
        /// Target index into the history.
        point_in_history: usize,
    },
    /// Flip the cosmetic icon flag.
    ToggleSpecialIcons,
    /// Any action tag the container does not recognise.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Creates a play action.
    pub fn play(board_index: Position, square_index: Position) -> Self {
        Action::PlaySquare {
            board_index,
            square_index,
        }
    }

    /// Creates a play action from raw indices, if both are in 0-8.
    pub fn play_indices(board_index: usize, square_index: usize) -> Option<Self> {
        Some(Self::play(
            Position::from_index(board_index)?,
            Position::from_index(square_index)?,
        ))
    }

    /// Creates a time travel action.
    pub fn time_travel(point_in_history: usize) -> Self {
        Action::TimeTravel { point_in_history }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaySquare {
                board_index,
                square_index,
            } => write!(f, "play {} -> {}", board_index.label(), square_index.label()),
            Action::TimeTravel { point_in_history } => {
                write!(f, "time travel to {}", point_in_history)
            }
            Action::ToggleSpecialIcons => write!(f, "toggle special icons"),
            Action::Unknown => write!(f, "unknown action"),
        }
    }
}

/// Reason a play is rejected by the rules.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The meta-board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The board is not the one the opponent was sent to.
    #[display("Board {} is not active", _0)]
    BoardInactive(Position),

    /// The board is already won locally.
    #[display("Board {} is already decided", _0)]
    BoardDecided(Position),

    /// The square at the position is already occupied.
    #[display("Square {} of board {} is already occupied", square, board)]
    SquareOccupied {
        /// Board containing the square.
        board: Position,
        /// The occupied square.
        square: Position,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
