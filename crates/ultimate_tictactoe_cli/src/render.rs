//! Plain-text rendering of the 9x9 grid.
//!
//! Local boards are laid out like the meta-board. Empty squares of active
//! boards show their square number so the player can type it; empty squares
//! of inactive boards show a dot.

use crate::config::CliConfig;
use tracing::instrument;
use ultimate_tictactoe::{
    BoardStatus, GameState, GameStatus, IntoEnumIterator, Position, Snapshot, Square, board_status,
};

const BOARD_SEPARATOR: &str = " ┃ ";
const ROW_SEPARATOR: &str = "━━━━━━┃━━━━━━━┃━━━━━━";

/// Renders the boards of `snapshot`.
#[instrument(skip_all)]
pub fn render_snapshot(snapshot: &Snapshot, config: &CliConfig, special_icons: bool) -> String {
    let mut lines = Vec::with_capacity(11);
    for meta_row in 0..3 {
        if meta_row > 0 {
            lines.push(ROW_SEPARATOR.to_string());
        }
        for inner_row in 0..3 {
            let row = (0..3)
                .filter_map(|meta_col| Position::from_index(meta_row * 3 + meta_col))
                .map(|board| render_board_row(snapshot, board, inner_row, config, special_icons))
                .collect::<Vec<_>>()
                .join(BOARD_SEPARATOR);
            lines.push(row);
        }
    }
    lines.join("\n")
}

fn render_board_row(
    snapshot: &Snapshot,
    board: Position,
    inner_row: usize,
    config: &CliConfig,
    special_icons: bool,
) -> String {
    let local = snapshot.board(board);
    (0..3)
        .filter_map(|col| Position::from_index(inner_row * 3 + col))
        .map(|square| match local.get(square) {
            Square::Occupied(player) => config.glyph(player, special_icons).to_string(),
            Square::Empty if local.is_active() => square.to_index().to_string(),
            Square::Empty => ".".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of who is to move or how the game ended.
pub fn describe_status(state: &GameState, config: &CliConfig) -> String {
    match state.status() {
        GameStatus::InProgress => {
            let active = Position::iter()
                .filter(|pos| state.current().board(*pos).is_active())
                .map(|pos| pos.to_index().to_string())
                .collect::<Vec<_>>();
            format!(
                "{} to move on board {}",
                config.glyph(state.next_player(), state.special_icons()),
                if active.len() == 9 {
                    "any".to_string()
                } else {
                    active.join(", ")
                }
            )
        }
        GameStatus::Won(player) => {
            format!("{} wins!", config.glyph(player, state.special_icons()))
        }
        GameStatus::Draw => "Draw: no legal moves remain".to_string(),
    }
}

/// Summary of each local board's result, e.g. `0:X 3:full`.
pub fn describe_boards(state: &GameState, config: &CliConfig) -> String {
    Position::iter()
        .filter_map(|pos| match board_status(state.current().board(pos)) {
            BoardStatus::Won(player) => Some(format!(
                "{}:{}",
                pos.to_index(),
                config.glyph(player, state.special_icons())
            )),
            BoardStatus::Full => Some(format!("{}:full", pos.to_index())),
            BoardStatus::Open => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full screen for `state`: grid, move counter and status.
#[instrument(skip_all, fields(point = state.point_in_history()))]
pub fn render_state(state: &GameState, config: &CliConfig) -> String {
    let mut out = render_snapshot(state.current(), config, state.special_icons());
    out.push_str(&format!(
        "\n\nMove {} of {}\n{}",
        state.point_in_history(),
        state.history().len() - 1,
        describe_status(state, config)
    ));
    let boards = describe_boards(state, config);
    if !boards.is_empty() {
        out.push_str(&format!("\nDecided boards: {}", boards));
    }
    out
}
