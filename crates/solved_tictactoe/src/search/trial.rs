//! Scoped trial placements for the search.

use super::super::{Board, Player, Position, Square};
use std::ops::{Deref, DerefMut};

/// A hypothetical mark on a scratch board.
///
/// The mark is placed when the trial is created and cleared when it is
/// dropped, including during unwinding.
pub(crate) struct Trial<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Trial<'a> {
    /// Places `player` at the empty `position`.
    pub(crate) fn place(board: &'a mut Board, position: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(position), "trial on occupied square");
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Square::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_is_undone_on_drop() {
        let mut board = Board::new();
        {
            let trial = Trial::place(&mut board, Position::Center, Player::O);
            assert_eq!(trial.get(Position::Center), Square::Occupied(Player::O));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nested_trials_unwind_in_order() {
        let mut board: Board = "X........".parse().unwrap();
        let before = board.clone();
        {
            let mut outer = Trial::place(&mut board, Position::Center, Player::O);
            let inner = Trial::place(&mut outer, Position::BottomRight, Player::X);
            assert_eq!(inner.notation(), "X...O...X");
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_is_undone_on_panic() {
        let mut board = Board::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _trial = Trial::place(&mut board, Position::TopLeft, Player::X);
            panic!("search aborted");
        }));
        assert!(result.is_err());
        assert_eq!(board, Board::new());
    }
}
