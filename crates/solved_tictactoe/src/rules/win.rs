//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first completed line, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    WIN_LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Returns every completed line with its owner.
///
/// Legal play completes lines for at most one player; this exists so
/// arbitrary boards can be inspected without assuming that.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_lines(board: &Board) -> Vec<([Position; 3], Player)> {
    WIN_LINES
        .into_iter()
        .filter_map(|line| line_owner(board, line).map(|player| (line, player)))
        .collect()
}
