//! Rules invariant: every history entry is the engine's own successor.

use super::super::contracts::LegalMove;
use super::super::engine::advance;
use super::super::{GameState, Move, Player};
use super::Invariant;

/// Invariant: each entry is what a legal play from the previous entry
/// produces, board activation included.
///
/// The play is recovered the same way the action log recovers it (first
/// changed square), so a history satisfying this invariant always
/// survives a share and replay unchanged.
pub struct RulesFollowedInvariant;

impl Invariant<GameState> for RulesFollowedInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(moves_before, pair)| {
                let (before, after) = (pair[0].snapshot(), pair[1].snapshot());
                let Some((board, square)) = before.changed_cells(after).next() else {
                    return false;
                };
                let mv = Move::new(board, square);
                LegalMove::check(&mv, before).is_ok()
                    && advance(before, Player::for_move_count(moves_before), mv) == *after
            })
    }

    fn description() -> &'static str {
        "Each history entry follows from a legal play on the previous one"
    }
}
