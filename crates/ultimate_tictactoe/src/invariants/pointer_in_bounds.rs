//! Pointer invariant: the history pointer names an existing entry.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= point_in_history < history.len()`.
pub struct PointerInBoundsInvariant;

impl Invariant<GameState> for PointerInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.point_in_history() < state.history().len()
    }

    fn description() -> &'static str {
        "History pointer refers to an existing entry"
    }
}
