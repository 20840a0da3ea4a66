//! Game state: the recorded history and the pointer into it.

use super::rules::{global_winner, is_resolved};
use super::{HistoryEntry, Player, Snapshot};
use serde::{Deserialize, Serialize};

/// Current status of the game at the history pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player won the meta-board.
    Won(Player),
    /// Every local board is resolved and nobody won.
    Draw,
}

/// Complete game state.
///
/// States are values: every transition builds a new `GameState` and leaves
/// the input untouched. The player to move is not stored; it follows from
/// the parity of the history pointer.
///
/// Serializes as the save game document (see [`save_game`](crate::save_game));
/// deserializing validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "crate::save::SavedGame", try_from = "crate::save::SavedGame")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) point_in_history: usize,
    pub(crate) special_icons: bool,
}

impl GameState {
    /// Creates a new game at the starting position.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::new(Snapshot::initial())],
            point_in_history: 0,
            special_icons: false,
        }
    }

    /// Returns the recorded history. `history()[0]` is the starting position.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed position within the history.
    pub fn point_in_history(&self) -> usize {
        self.point_in_history
    }

    /// Whether the cosmetic icon set is enabled.
    pub fn special_icons(&self) -> bool {
        self.special_icons
    }

    /// The player to move: X on even points, O on odd ones.
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.point_in_history)
    }

    /// The snapshot at the history pointer.
    pub fn current(&self) -> &Snapshot {
        self.history[self.point_in_history].snapshot()
    }

    /// Winner of the current position, if any.
    pub fn winner(&self) -> Option<Player> {
        global_winner(self.current())
    }

    /// Status of the current position.
    pub fn status(&self) -> GameStatus {
        let current = self.current();
        if let Some(winner) = global_winner(current) {
            return GameStatus::Won(winner);
        }
        if current
            .boards()
            .iter()
            .all(|board| is_resolved(board.squares()))
        {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
