//! Ultimate tic-tac-toe rules engine.
//!
//! Nine local tic-tac-toe boards arranged in a 3x3 meta-board. The square
//! a player marks decides which local board the opponent must play next;
//! winning three local boards in a row wins the game.
//!
//! # Architecture
//!
//! - **Rules**: pure win/fullness checks, reused unchanged for the meta-board
//! - **Engine**: move legality, board activation, history truncation
//! - **Reducer**: [`dispatch`], the single entry point for every [`Action`]
//! - **Action log**: history ⇄ actions ⇄ `a[]=p40&a[]=ti` query strings
//! - **Save**: full-state JSON documents, validated against [`invariants`]
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{dispatch, Action, GameState, Player, Position};
//!
//! let state = GameState::new();
//! let state = dispatch(&state, &Action::play(Position::Center, Position::TopLeft));
//!
//! // O must now answer in the top-left board.
//! assert_eq!(state.next_player(), Player::O);
//! assert!(state.current().board(Position::TopLeft).is_active());
//! assert!(!state.current().board(Position::Center).is_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod action_log;
mod engine;
mod position;
mod reducer;
mod save;
mod state;
mod types;

// Public rule and verification modules
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use position::Position;
pub use strum::IntoEnumIterator;
pub use state::{GameState, GameStatus};
pub use types::{BoardStatus, HistoryEntry, LocalBoard, Player, Snapshot, Square};

/// Alias matching the rules vocabulary: a mark is the player who owns a square.
pub type Mark = Player;

// Crate-level exports - Actions and errors
pub use action::{Action, Move, MoveError};

// Crate-level exports - Engine and state container
pub use engine::{check_play, legal_moves, play_square, time_travel, toggle_special_icons};
pub use reducer::dispatch;

// Crate-level exports - Win detection
pub use rules::{board_status, global_winner, is_full, is_resolved, local_winner};

// Crate-level exports - Action log codec
pub use action_log::{
    actions_to_query_string, actions_to_state, game_actions, history_to_actions,
    query_string_to_actions, share_url, state_from_url, state_to_query_string,
};

// Crate-level exports - Save/load
pub use save::{load_game, save_game, save_game_pretty, SaveGameError, SaveGameErrorKind};
