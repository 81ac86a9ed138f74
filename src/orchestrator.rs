//! Game orchestration between two players on a text terminal.

use crate::players::{Action, Player};
use anyhow::{Context, Result};
use solved_tictactoe::{GameState, Mark, Outcome};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// Drives a [`GameState`] between two players and renders it to `out`.
///
/// Only the player on move is asked for input. Once a game is over, the
/// controlling player decides whether to reset or quit.
pub struct Orchestrator<W> {
    game: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    controller: Mark,
    out: W,
    finished: Vec<Outcome>,
}

impl<W: AsyncWrite + Unpin + Send> Orchestrator<W> {
    /// Creates an orchestrator; `controller` picks reset or quit after a game.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, controller: Mark, out: W) -> Self {
        Self {
            game: GameState::new(),
            player_x,
            player_o,
            controller,
            out,
            finished: Vec::new(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Outcomes of the games completed so far.
    pub fn finished(&self) -> &[Outcome] {
        &self.finished
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    fn is_interactive(&self, mark: Mark) -> bool {
        match mark {
            Mark::X => self.player_x.is_interactive(),
            Mark::O => self.player_o.is_interactive(),
        }
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let text = format!("\n{}\n\n{}", self.game.board().display(), self.game.status_text());
        self.say(&text).await
    }

    /// Runs until the controlling player quits or input ends.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!(x = %self.name(Mark::X), o = %self.name(Mark::O), "Starting game orchestration");
        self.render().await?;

        loop {
            let outcome = self.game.outcome();
            let mover = if outcome.is_terminal() {
                self.controller
            } else {
                self.game.to_move()
            };

            debug!(player = %self.name(mover), "Waiting for action");
            let player = match mover {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let action = player.next_action(&self.game).await?;

            match action {
                Action::Quit => {
                    info!(games = self.finished.len(), "Session ended");
                    return Ok(());
                }
                Action::Reset => {
                    self.game.reset();
                    self.say("New game.").await?;
                    self.render().await?;
                }
                Action::Unrecognized(input) => {
                    warn!(%input, "Unrecognized input");
                    self.say(&format!("Unrecognized input {:?}: type 0-8, a square name, reset or quit.", input))
                        .await?;
                }
                Action::Place(_) if outcome.is_terminal() => {
                    self.say("The game is over. Type reset to play again or quit to leave.").await?;
                }
                Action::Place(index) => self.place(mover, index).await?,
            }
        }
    }

    async fn place(&mut self, mover: Mark, index: usize) -> Result<()> {
        match self.game.apply_move(index, mover) {
            Ok(outcome) => {
                let name = self.name(mover).to_string();
                self.say(&format!("{} ({}) plays {}.", name, mover, index)).await?;
                self.render().await?;
                if outcome.is_terminal() {
                    self.finished.push(outcome);
                    if self.is_interactive(self.controller) {
                        self.say("Type reset to play again or quit to leave.").await?;
                    }
                }
                Ok(())
            }
            Err(err) => {
                if !self.is_interactive(mover) {
                    return Err(err).with_context(|| format!("{} made an illegal move", self.name(mover)));
                }
                warn!(%err, index, player = %mover, "Move rejected");
                self.say(&format!("{}. Try again.", err)).await?;
                Ok(())
            }
        }
    }
}
