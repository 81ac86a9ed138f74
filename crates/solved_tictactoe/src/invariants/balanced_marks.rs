//! Balanced marks invariant: X leads O by zero or one.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X moves first and turns alternate, so `count(X) - count(O)`
/// is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_holds_through_play() {
        let mut game = GameState::new();
        for index in [4, 0, 8, 2] {
            game.apply_move(index, game.to_move()).unwrap();
            assert!(BalancedMarksInvariant::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = GameState::new();
        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}
