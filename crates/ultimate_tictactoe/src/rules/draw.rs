//! Fullness and resolution checks for local boards.

use super::super::{BoardStatus, LocalBoard, Square};
use super::win::local_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| *s != Square::Empty)
}

/// A board is resolved once it is won or full; it can take no further move.
#[instrument(level = "trace")]
pub fn is_resolved(squares: &[Square; 9]) -> bool {
    local_winner(squares).is_some() || is_full(squares)
}

/// Classifies a local board for display.
pub fn board_status(board: &LocalBoard) -> BoardStatus {
    match local_winner(board.squares()) {
        Some(player) => BoardStatus::Won(player),
        None if is_full(board.squares()) => BoardStatus::Full,
        None => BoardStatus::Open,
    }
}
