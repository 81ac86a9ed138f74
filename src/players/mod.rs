//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use solved_tictactoe::GameState;

/// What a player wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a board index (0-8).
    Place(usize),
    /// Throw the game away and start a new one.
    Reset,
    /// Leave the session.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next action from this player.
    ///
    /// Called on the player's turn, and on the controlling player once the
    /// game is over.
    async fn next_action(&mut self, game: &GameState) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a rejected move should be reported back for another try.
    ///
    /// Automated players never retry; a rejected move from them is a bug.
    fn is_interactive(&self) -> bool {
        false
    }
}
