//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added by history entry `k` belongs to X when `k` is
/// odd (first, third, ... move) and to O when it is even.
///
/// Entries that do not add exactly one mark are left to
/// [`HistoryConsistentInvariant`](super::HistoryConsistentInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(moves_before, pair)| {
                let (before, after) = (pair[0].snapshot(), pair[1].snapshot());
                before.changed_cells(after).all(|(board, square)| {
                    match after.board(board).get(square) {
                        Square::Occupied(player) => player == Player::for_move_count(moves_before),
                        Square::Empty => true,
                    }
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
