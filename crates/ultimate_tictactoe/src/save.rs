//! Save/load: the full game state as a JSON document.
//!
//! Unlike the action log, a save game transfers every recorded snapshot:
//!
//! ```json
//! {"nextPlayer":"X","history":[{"boards":[{"squares":[null,...],"isActive":true},...]}],
//!  "pointInHistory":0,"specialIcons":false}
//! ```

use super::invariants::{GameInvariants, InvariantSet};
use super::{GameState, HistoryEntry, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Wire form of [`GameState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SavedGame {
    /// Redundant with the pointer's parity; checked when present.
    #[serde(default)]
    next_player: Option<Player>,
    history: Vec<HistoryEntry>,
    point_in_history: usize,
    #[serde(default)]
    special_icons: bool,
}

impl From<GameState> for SavedGame {
    fn from(state: GameState) -> Self {
        Self {
            next_player: Some(state.next_player()),
            history: state.history,
            point_in_history: state.point_in_history,
            special_icons: state.special_icons,
        }
    }
}

impl TryFrom<SavedGame> for GameState {
    type Error = SaveGameError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let state = GameState {
            history: saved.history,
            point_in_history: saved.point_in_history,
            special_icons: saved.special_icons,
        };

        if let Err(violations) = GameInvariants::check_all(&state) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SaveGameError::new(SaveGameErrorKind::Invariant(descriptions)));
        }

        if let Some(next_player) = saved.next_player
            && next_player != state.next_player()
        {
            return Err(SaveGameError::new(SaveGameErrorKind::Invariant(format!(
                "nextPlayer {} does not match point in history {}",
                next_player, state.point_in_history
            ))));
        }

        Ok(state)
    }
}

/// Serializes the whole state to the save game document.
#[instrument(skip(state), fields(entries = state.history().len()))]
pub fn save_game(state: &GameState) -> Result<String, SaveGameError> {
    write_document(state, serde_json::to_string)
}

/// Same as [`save_game`], indented for people to read.
#[instrument(skip(state), fields(entries = state.history().len()))]
pub fn save_game_pretty(state: &GameState) -> Result<String, SaveGameError> {
    write_document(state, serde_json::to_string_pretty)
}

fn write_document(
    state: &GameState,
    write: fn(&SavedGame) -> serde_json::Result<String>,
) -> Result<String, SaveGameError> {
    write(&SavedGame::from(state.clone()))
        .map_err(|e| SaveGameError::new(SaveGameErrorKind::Serialize(e.to_string())))
}

/// Parses and validates a save game document.
///
/// Text that is not a save game is a [`SaveGameErrorKind::Syntax`] error. A
/// document that parses but describes a game the engine could not have
/// played (an illegal move, activation flags the rules would not set, a
/// pointer past the end) is [`SaveGameErrorKind::Invariant`].
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn load_game(text: &str) -> Result<GameState, SaveGameError> {
    let saved: SavedGame = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "Save game is not valid JSON");
        SaveGameError::new(SaveGameErrorKind::Syntax(e.to_string()))
    })?;

    let state = GameState::try_from(saved)?;
    info!(
        entries = state.history().len(),
        point = state.point_in_history(),
        "Save game loaded"
    );
    Ok(state)
}

/// What went wrong with a save game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SaveGameErrorKind {
    /// The text is not a save game document.
    #[display("Invalid save game JSON: {}", _0)]
    Syntax(String),
    /// The document describes a game the rules cannot produce.
    #[display("Save game breaks game invariants: {}", _0)]
    Invariant(String),
    /// The state could not be written out. Only reachable if JSON encoding
    /// itself fails; every `GameState` has a document form.
    #[display("Could not serialize game: {}", _0)]
    Serialize(String),
}

/// Save/load error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Save game error: {} at {}:{}", kind, file, line)]
pub struct SaveGameError {
    /// Error kind.
    pub kind: SaveGameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SaveGameError {
    /// Creates a new save game error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SaveGameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
