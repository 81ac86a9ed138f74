//! Human player reading moves from a line-based input.

use super::{Action, Player};
use anyhow::Result;
use solved_tictactoe::{GameState, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

/// Human player typing one command per line.
///
/// Accepts a board index (0-8), a square label such as `center`, `reset`
/// or `quit`. End of input counts as `quit`.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }
}

/// Interprets one line of human input.
pub fn parse_action(line: &str) -> Action {
    match line.trim().to_ascii_lowercase().as_str() {
        "reset" | "r" | "new" => Action::Reset,
        "quit" | "q" | "exit" => Action::Quit,
        other => match Position::from_label_or_number(other) {
            Some(position) => Action::Place(position.to_index()),
            // Out-of-range numbers still reach the engine so it can reject them.
            None => match other.parse::<usize>() {
                Ok(index) => Action::Place(index),
                Err(_) => Action::Unrecognized(line.trim().to_string()),
            },
        },
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn next_action(&mut self, _game: &GameState) -> Result<Action> {
        loop {
            match self.lines.next_line().await? {
                None => return Ok(Action::Quit),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => {
                    let action = parse_action(&line);
                    debug!(player = %self.name, ?action, "Human input");
                    return Ok(action);
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
