//! Win detection logic for local boards and the meta-board.

use super::super::{Player, Position, Snapshot, Square};
use tracing::instrument;

const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on a 9-square board.
///
/// Returns `Some(player)` if the player holds a complete row, column or
/// diagonal, `None` otherwise. A full board without a line is also `None`.
#[instrument(level = "trace")]
pub fn local_winner(squares: &[Square; 9]) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = squares[a.to_index()];
        if sq != Square::Empty && sq == squares[b.to_index()] && sq == squares[c.to_index()] {
            return sq.player();
        }
    }

    None
}

/// Winner of the whole game.
///
/// Builds the meta-board from each local board's winner (no winner counts as
/// empty) and runs [`local_winner`] on it.
#[instrument(level = "trace", skip(snapshot))]
pub fn global_winner(snapshot: &Snapshot) -> Option<Player> {
    let meta: [Square; 9] =
        std::array::from_fn(|i| Square::from(local_winner(snapshot.boards()[i].squares())));
    local_winner(&meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocalBoard;

    fn squares(marks: &str) -> [Square; 9] {
        let mut out = [Square::Empty; 9];
        for (i, c) in marks.chars().enumerate() {
            out[i] = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        out
    }

    fn won_board(player: Player) -> LocalBoard {
        let mark = if player == Player::X { "XXX......" } else { "OOO......" };
        LocalBoard::from_parts(squares(mark), true)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(local_winner(&[Square::Empty; 9]), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(local_winner(&squares("XXX.O.O..")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(local_winner(&squares(".O.XOX.O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(local_winner(&squares("O...O...O")), Some(Player::O));
        assert_eq!(local_winner(&squares("..X.X.X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(local_winner(&squares("XX.......")), None);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        assert_eq!(local_winner(&squares("XOXOXXOXO")), None);
    }

    #[test]
    fn test_global_winner_meta_column() {
        let mut boards: [LocalBoard; 9] = std::array::from_fn(|_| LocalBoard::new());
        boards[1] = won_board(Player::O);
        boards[4] = won_board(Player::O);
        boards[7] = won_board(Player::O);
        boards[0] = won_board(Player::X);
        assert_eq!(global_winner(&Snapshot::from_boards(boards)), Some(Player::O));
    }

    #[test]
    fn test_global_winner_needs_a_line_of_local_wins() {
        let mut boards: [LocalBoard; 9] = std::array::from_fn(|_| LocalBoard::new());
        boards[0] = won_board(Player::X);
        boards[1] = won_board(Player::X);
        boards[2] = won_board(Player::O);
        assert_eq!(global_winner(&Snapshot::from_boards(boards)), None);
    }
}
