//! History consistency invariant: each entry adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: adjacent history entries differ by exactly one square, which
/// went from empty to occupied.
///
/// This is the precondition the action log relies on when it diffs
/// snapshots to recover the move between them.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].snapshot(), pair[1].snapshot());
            let mut changed = before.changed_cells(after);
            match (changed.next(), changed.next()) {
                (Some((board, square)), None) => {
                    before.board(board).get(square) == Square::Empty
                        && after.board(board).get(square) != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, HistoryEntry, Player, Position, dispatch};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_moves_hold() {
        let state = [
            Action::play(Position::TopLeft, Position::Center),
            Action::play(Position::Center, Position::BottomRight),
            Action::play(Position::BottomRight, Position::TopLeft),
        ]
        .iter()
        .fold(GameState::new(), |state, action| dispatch(&state, action));

        assert_eq!(state.history().len(), 4);
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_two_marks_in_one_entry_violates() {
        let mut state = dispatch(
            &GameState::new(),
            &Action::play(Position::TopLeft, Position::Center),
        );
        let mut corrupted = state.history[1].snapshot().clone();
        corrupted
            .board_mut(Position::BottomLeft)
            .set(Position::TopLeft, Square::Occupied(Player::O));
        state.history[1] = HistoryEntry::new(corrupted);

        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_erased_mark_violates() {
        let mut state = dispatch(
            &GameState::new(),
            &Action::play(Position::TopLeft, Position::Center),
        );
        // entry 2 equals the origin: the mark from entry 1 was erased
        state.history.push(state.history[0].clone());

        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
