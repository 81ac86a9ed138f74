//! History consistency invariant: the board is exactly the replayed history.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board, with no square played twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let mut replayed = Board::new();
        for mov in game.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.player));
        }
        &replayed == game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
