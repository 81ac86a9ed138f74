//! Printable search results for the `best-move` and `analyze` commands.

use serde::Serialize;
use solved_tictactoe::{best_move, move_values, Board, Mark, Position, SearchError};

/// Minimax value of one candidate move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Board index (0-8).
    pub index: usize,
    /// Named square.
    pub position: Position,
    /// +1 forced win, 0 draw, -1 forced loss for the side to move.
    pub value: i32,
    /// Whether the search picks this move.
    pub chosen: bool,
}

/// Evaluates every legal move for `mark`, flagging the one the search picks.
pub fn analyze(board: &Board, mark: Mark) -> Result<Vec<MoveReport>, SearchError> {
    let chosen = best_move(board, mark)?;
    Ok(move_values(board, mark)?
        .into_iter()
        .map(|(position, value)| MoveReport {
            index: position.to_index(),
            position,
            value,
            chosen: position == chosen,
        })
        .collect())
}

/// One line per move, e.g. `2  Top-right      +1  <- best`.
pub fn render(reports: &[MoveReport]) -> String {
    reports
        .iter()
        .map(|r| {
            let marker = if r.chosen { "  <- best" } else { "" };
            format!("{}  {:<14}{:+}{}", r.index, r.position.label(), r.value, marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
