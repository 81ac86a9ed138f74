//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Both the game engine and the
//! move search judge positions through this module, so they cannot disagree
//! about what a win is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_lines, WIN_LINES};

use super::{Board, Outcome};

/// Evaluates the outcome of a board.
///
/// A completed line wins (the first in [`WIN_LINES`] order if a corrupted
/// board has several); otherwise a full board is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
