//! Exhaustive minimax move search.
//!
//! The full game tree from any position has at most 9! leaves, so the search
//! walks all of it with no pruning or depth limit. Scores are from the
//! searching player's point of view: +1 win, 0 draw, -1 loss.
//!
//! Among moves with equal value the lowest board index wins. The scan runs
//! 0..8 and only a strictly greater value replaces the current best.

mod trial;

use super::{rules, Board, Outcome, Player, Position};
use derive_more::Display;
use trial::Trial;
use tracing::{debug, instrument};

/// Error returned when the search has nothing to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// The board is full or already decided.
    #[display("No legal moves: the game is already over")]
    NoLegalMoves,
}

impl std::error::Error for SearchError {}

/// Terminal score of `board` for `mark`.
///
/// `None` while the game is still in progress.
pub fn score(board: &Board, mark: Player) -> Option<i32> {
    match rules::evaluate(board) {
        Outcome::InProgress => None,
        Outcome::Won(winner) if winner == mark => Some(1),
        Outcome::Won(_) => Some(-1),
        Outcome::Draw => Some(0),
    }
}

/// Minimax over a scratch board, counting visited nodes.
struct Minimax {
    mark: Player,
    nodes: u64,
}

impl Minimax {
    fn new(mark: Player) -> Self {
        Self { mark, nodes: 0 }
    }

    /// Value of `board` with `side` to move, under perfect play by both sides.
    fn value(&mut self, board: &mut Board, side: Player) -> i32 {
        self.nodes += 1;
        if let Some(score) = score(board, self.mark) {
            return score;
        }

        let maximizing = side == self.mark;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }
            let mut trial = Trial::place(board, position, side);
            let child = self.value(&mut trial, side.opponent());
            best = if maximizing { best.max(child) } else { best.min(child) };
        }
        best
    }

    /// Value of each legal move for `self.mark`, in index order.
    fn root_values(&mut self, board: &Board) -> Result<Vec<(Position, i32)>, SearchError> {
        if rules::evaluate(board).is_terminal() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut scratch = board.clone();
        let mut values = Vec::new();
        for position in Position::ALL {
            if !scratch.is_empty(position) {
                continue;
            }
            let mut trial = Trial::place(&mut scratch, position, self.mark);
            let value = self.value(&mut trial, self.mark.opponent());
            values.push((position, value));
        }
        Ok(values)
    }
}

/// Returns the optimal move for `mark` on `board`.
///
/// The board is only read; trial placements happen on a private copy.
///
/// # Errors
///
/// [`SearchError::NoLegalMoves`] if the board is full or already won.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, mark: Player) -> Result<Position, SearchError> {
    let mut search = Minimax::new(mark);
    let values = search.root_values(board)?;

    let mut best: Option<(Position, i32)> = None;
    for (position, value) in values {
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((position, value));
        }
    }

    let (position, value) = best.ok_or(SearchError::NoLegalMoves)?;
    debug!(%position, value, nodes = search.nodes, "Search complete");
    Ok(position)
}

/// Minimax value of every legal move for `mark`, in index order.
///
/// # Errors
///
/// [`SearchError::NoLegalMoves`] if the board is full or already won.
#[instrument(skip(board), fields(board = %board))]
pub fn move_values(board: &Board, mark: Player) -> Result<Vec<(Position, i32)>, SearchError> {
    let mut search = Minimax::new(mark);
    let values = search.root_values(board)?;
    debug!(moves = values.len(), nodes = search.nodes, "Evaluated all moves");
    Ok(values)
}
