//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{global_winner, local_winner};
use super::{GameState, Snapshot};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: Nobody has won the meta-board yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the precondition.
    pub fn check(_mv: &Move, snapshot: &Snapshot) -> Result<(), MoveError> {
        match global_winner(snapshot) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The target board is one the player was sent to.
pub struct BoardIsActive;

impl BoardIsActive {
    /// Checks the precondition.
    pub fn check(mv: &Move, snapshot: &Snapshot) -> Result<(), MoveError> {
        if snapshot.board(mv.board).is_active() {
            Ok(())
        } else {
            Err(MoveError::BoardInactive(mv.board))
        }
    }
}

/// Precondition: The target board is not already won.
pub struct BoardUndecided;

impl BoardUndecided {
    /// Checks the precondition.
    pub fn check(mv: &Move, snapshot: &Snapshot) -> Result<(), MoveError> {
        match local_winner(snapshot.board(mv.board).squares()) {
            Some(_) => Err(MoveError::BoardDecided(mv.board)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    pub fn check(mv: &Move, snapshot: &Snapshot) -> Result<(), MoveError> {
        if snapshot.board(mv.board).is_empty(mv.square) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied {
                board: mv.board,
                square: mv.square,
            })
        }
    }
}

/// Composite precondition: every rule that makes a play legal.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move from `snapshot`, in rule order.
    #[instrument(level = "trace", skip(snapshot))]
    pub fn check(mv: &Move, snapshot: &Snapshot) -> Result<(), MoveError> {
        GameUndecided::check(mv, snapshot)?;
        BoardIsActive::check(mv, snapshot)?;
        SquareIsEmpty::check(mv, snapshot)?;
        BoardUndecided::check(mv, snapshot)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for play actions.
///
/// Preconditions:
/// - Meta-board undecided
/// - Board active and not won
/// - Square empty
///
/// Postconditions:
/// - Exactly one more history entry than the kept prefix
/// - All [`GameInvariants`] hold
pub struct PlayContract;

impl Contract<GameState, Move> for PlayContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game.current())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.point_in_history() + 2 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history has {} entries after playing from point {}",
                after.history().len(),
                before.point_in_history()
            )));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that the play postcondition holds (debug builds only).
#[instrument(level = "trace", skip_all)]
pub fn assert_play_postcondition(before: &GameState, after: &GameState) {
    if !cfg!(debug_assertions) {
        return;
    }
    let result = PlayContract::post(before, after);
    if let Err(err) = &result {
        warn!(%err, "Play postcondition violated");
    }
    debug_assert!(result.is_ok(), "{:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Position, dispatch};

    fn after_first_move() -> GameState {
        dispatch(
            &GameState::new(),
            &Action::play(Position::Center, Position::TopLeft),
        )
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        let mv = Move::new(Position::Center, Position::Center);
        assert!(PlayContract::pre(&game, &mv).is_ok());
    }

    #[test]
    fn test_precondition_inactive_board() {
        let game = after_first_move();
        let mv = Move::new(Position::TopCenter, Position::Center);
        assert_eq!(
            PlayContract::pre(&game, &mv),
            Err(MoveError::BoardInactive(Position::TopCenter))
        );
    }

    #[test]
    fn test_precondition_occupied_square() {
        // O answers in board 0 and sends X back to board 4
        let game = dispatch(
            &after_first_move(),
            &Action::play(Position::TopLeft, Position::Center),
        );
        let mv = Move::new(Position::Center, Position::TopLeft);
        assert_eq!(
            PlayContract::pre(&game, &mv),
            Err(MoveError::SquareOccupied {
                board: Position::Center,
                square: Position::TopLeft,
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = after_first_move();
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_entry() {
        let before = GameState::new();
        assert!(matches!(
            PlayContract::post(&before, &before),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
