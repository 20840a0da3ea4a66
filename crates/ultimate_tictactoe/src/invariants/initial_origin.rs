//! Origin invariant: history starts from the empty, all-active position.

use super::super::{GameState, Snapshot};
use super::Invariant;

/// Invariant: `history[0]` is the starting position.
pub struct InitialOriginInvariant;

impl Invariant<GameState> for InitialOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .first()
            .is_some_and(|entry| *entry.snapshot() == Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts from the empty, all-active position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(InitialOriginInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut state = GameState::new();
        state.history.clear();
        assert!(!InitialOriginInvariant::holds(&state));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut state = GameState::new();
        let mut origin = Snapshot::initial();
        origin
            .board_mut(Position::Center)
            .set(Position::Center, Square::Occupied(Player::X));
        state.history[0] = crate::HistoryEntry::new(origin);
        assert!(!InitialOriginInvariant::holds(&state));
    }

    #[test]
    fn test_inactive_origin_violates() {
        let mut state = GameState::new();
        let mut origin = Snapshot::initial();
        origin.board_mut(Position::TopLeft).set_active(false);
        state.history[0] = crate::HistoryEntry::new(origin);
        assert!(!InitialOriginInvariant::holds(&state));
    }
}
