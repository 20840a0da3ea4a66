//! State container: the single entry point for applying actions.

use super::engine::{play_square, time_travel, toggle_special_icons};
use super::{Action, GameState};
use tracing::{debug, instrument};

/// Applies `action` to `state`, returning the next state.
///
/// Total: unrecognised actions and illegal plays return an unchanged copy.
#[instrument(skip(state), fields(point = state.point_in_history()))]
pub fn dispatch(state: &GameState, action: &Action) -> GameState {
    match *action {
        Action::PlaySquare {
            board_index,
            square_index,
        } => play_square(state, board_index, square_index),
        Action::TimeTravel { point_in_history } => time_travel(state, point_in_history),
        Action::ToggleSpecialIcons => toggle_special_icons(state),
        Action::Unknown => {
            debug!("Ignoring unrecognised action");
            state.clone()
        }
    }
}

impl GameState {
    /// Method form of [`dispatch`].
    pub fn apply(&self, action: &Action) -> GameState {
        dispatch(self, action)
    }
}
