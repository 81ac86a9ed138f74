//! Computer player backed by the minimax search.

use super::{Action, Player};
use anyhow::{Context, Result};
use solved_tictactoe::{best_move, GameState, Mark};
use std::time::Duration;
use tracing::debug;

/// Computer player that always picks the optimal move.
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    think_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer playing `mark`, pausing `think_delay` before each move.
    pub fn new(name: impl Into<String>, mark: Mark, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            mark,
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn next_action(&mut self, game: &GameState) -> Result<Action> {
        if game.outcome().is_terminal() {
            return Ok(Action::Quit);
        }

        debug!(ai = %self.name, "Computer thinking");
        tokio::time::sleep(self.think_delay).await;

        let position = best_move(game.board(), self.mark).context("Computer asked to move on a finished board")?;
        debug!(ai = %self.name, %position, "Computer chose position");
        Ok(Action::Place(position.to_index()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
