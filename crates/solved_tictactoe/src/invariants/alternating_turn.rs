//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// History reads X, O, X, O, ... and `to_move` is the next player while the
/// game runs, or the last mover once it is over.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternates = history.iter().enumerate().all(|(ply, mov)| {
            let expected = if ply % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        match history.last() {
            None => game.to_move() == Player::X,
            Some(last) if game.outcome().is_terminal() => game.to_move() == last.player,
            Some(last) => game.to_move() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
