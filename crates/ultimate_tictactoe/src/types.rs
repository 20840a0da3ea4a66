//! Core domain types for ultimate tic-tac-toe.

use super::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player to move after `moves_played` moves from the start.
    pub fn for_move_count(moves_played: usize) -> Self {
        if moves_played % 2 == 0 { Player::X } else { Player::O }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on a local board.
///
/// Serialized as `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Option<Player>> for Square {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Player> {
    fn from(square: Square) -> Self {
        square.player()
    }
}

/// One 3x3 board inside the meta-board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBoard {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Whether this board accepts the next move.
    is_active: bool,
}

impl LocalBoard {
    /// Creates an empty, active board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            is_active: true,
        }
    }

    /// Creates a board from explicit squares and activity.
    pub fn from_parts(squares: [Square; 9], is_active: bool) -> Self {
        Self { squares, is_active }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Whether this board currently accepts a move.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }
}

impl Default for LocalBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete position at one point in time: nine local boards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    boards: [LocalBoard; 9],
}

impl Snapshot {
    /// The starting position: every board empty and active.
    pub fn initial() -> Self {
        Self {
            boards: std::array::from_fn(|_| LocalBoard::new()),
        }
    }

    /// Creates a snapshot from explicit boards.
    pub fn from_boards(boards: [LocalBoard; 9]) -> Self {
        Self { boards }
    }

    /// Returns the local board at the given position.
    pub fn board(&self, pos: Position) -> &LocalBoard {
        &self.boards[pos.to_index()]
    }

    pub(crate) fn board_mut(&mut self, pos: Position) -> &mut LocalBoard {
        &mut self.boards[pos.to_index()]
    }

    /// Returns all nine boards in index order.
    pub fn boards(&self) -> &[LocalBoard; 9] {
        &self.boards
    }

    /// Iterates over every (board, square) cell.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Position, Square)> + '_ {
        Position::iter().flat_map(move |board| {
            Position::iter()
                .map(move |square| (board, square, self.board(board).get(square)))
        })
    }

    /// Cells whose square differs between `self` and `other`, in board-major order.
    ///
    /// Activity flags are not compared.
    pub fn changed_cells<'a>(
        &'a self,
        other: &'a Snapshot,
    ) -> impl Iterator<Item = (Position, Position)> + 'a {
        self.cells()
            .filter(move |(board, square, value)| other.board(*board).get(*square) != *value)
            .map(|(board, square, _)| (board, square))
    }

    /// Number of occupied squares across all boards.
    pub fn occupied_count(&self) -> usize {
        self.cells()
            .filter(|(_, _, square)| *square != Square::Empty)
            .count()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// One recorded position in the game history.
///
/// Serialized as the snapshot itself (`{"boards": [...]}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
#[serde(transparent)]
pub struct HistoryEntry {
    snapshot: Snapshot,
}

impl HistoryEntry {
    /// Returns the wrapped snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Rendering-oriented status of one local board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    /// Three in a row for a player.
    Won(Player),
    /// Every square taken, no winner.
    Full,
    /// Still has empty squares and no winner.
    Open,
}
