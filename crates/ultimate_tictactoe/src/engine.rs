//! Move engine: applying plays, board activation and time travel.
//!
//! Every function here takes the current state by reference and returns a
//! fresh [`GameState`]; nothing reachable from the input is modified.

use super::action::{Move, MoveError};
use super::contracts::{assert_play_postcondition, Contract, PlayContract};
use super::rules::is_resolved;
use super::{GameState, HistoryEntry, Player, Position, Snapshot, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Explains why a play would be rejected, or `Ok(())` if it is legal.
#[instrument(skip(state), fields(point = state.point_in_history()))]
pub fn check_play(state: &GameState, board: Position, square: Position) -> Result<(), MoveError> {
    PlayContract::pre(state, &Move::new(board, square))
}

/// Plays `square` on `board` for the player to move.
///
/// Illegal plays (game decided, inactive or won board, occupied square)
/// return an unchanged copy of `state`. A legal play discards any history
/// beyond the pointer, appends the new position and moves the pointer to it.
#[instrument(skip(state), fields(point = state.point_in_history(), player = %state.next_player()))]
pub fn play_square(state: &GameState, board: Position, square: Position) -> GameState {
    let mv = Move::new(board, square);
    if let Err(reason) = PlayContract::pre(state, &mv) {
        debug!(%reason, "Play rejected");
        return state.clone();
    }

    let snapshot = advance(state.current(), state.next_player(), mv);

    let mut history = state.history[..=state.point_in_history].to_vec();
    history.push(HistoryEntry::new(snapshot));
    let point_in_history = history.len() - 1;

    let next = GameState {
        history,
        point_in_history,
        special_icons: state.special_icons,
    };

    assert_play_postcondition(state, &next);

    debug!(point = next.point_in_history, "Play applied");
    next
}

/// The snapshot after `player` marks `mv` on `snapshot`, activation included.
///
/// Legality is the caller's concern; see [`LegalMove`](crate::contracts::LegalMove).
pub(crate) fn advance(snapshot: &Snapshot, player: Player, mv: Move) -> Snapshot {
    let mut next = snapshot.clone();
    next.board_mut(mv.board).set(mv.square, Square::Occupied(player));
    activate_after(next, mv.square)
}

/// Sets board activity after a mark landed on square `target`.
///
/// The opponent is sent to board `target`. If that board is already won or
/// full, every board opens instead. This looks at the post-move boards, so a
/// move that fills or wins its own target board reopens everything.
fn activate_after(mut snapshot: Snapshot, target: Position) -> Snapshot {
    let free_move = is_resolved(snapshot.board(target).squares());
    for pos in Position::iter() {
        snapshot.board_mut(pos).set_active(free_move || pos == target);
    }
    snapshot
}

/// Moves the history pointer to `point_in_history` without truncating.
///
/// Targets outside the recorded history break the caller's contract; they
/// are logged and the state is returned unchanged.
#[instrument(skip(state), fields(from = state.point_in_history(), len = state.history().len()))]
pub fn time_travel(state: &GameState, point_in_history: usize) -> GameState {
    if point_in_history >= state.history.len() {
        warn!(point_in_history, "Time travel target outside recorded history");
        return state.clone();
    }

    GameState {
        point_in_history,
        ..state.clone()
    }
}

/// Flips the cosmetic icon flag; boards and history are untouched.
#[instrument(skip(state), fields(special_icons = state.special_icons()))]
pub fn toggle_special_icons(state: &GameState) -> GameState {
    GameState {
        special_icons: !state.special_icons,
        ..state.clone()
    }
}

/// Every play accepted from the current position, board-major.
#[instrument(skip(state), fields(point = state.point_in_history()))]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    Position::iter()
        .flat_map(|board| Position::iter().map(move |square| Move::new(board, square)))
        .filter(|mv| PlayContract::pre(state, mv).is_ok())
        .collect()
}
