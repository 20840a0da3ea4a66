//! Game rules for ultimate tic-tac-toe.
//!
//! This module contains pure functions for evaluating boards according to
//! tic-tac-toe rules. The same three-in-a-row check is applied to each local
//! board and then, unchanged, to the meta-board of local winners.

pub mod draw;
pub mod win;

pub use draw::{board_status, is_full, is_resolved};
pub use win::{global_winner, local_winner};
