//! Game state and move application for tic-tac-toe.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::{rules, Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete game state.
///
/// Owned by whoever drives the game. The board only changes through
/// [`GameState::apply_move`], and the outcome is sticky once terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this stays on the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played so far in this game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// One-line status for display.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("{}'s turn", self.to_move),
            terminal => terminal.to_string(),
        }
    }

    /// Places `player`'s mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Checked in this order, and nothing changes on failure:
    /// - [`MoveError::InvalidIndex`] if `index` is not 0-8
    /// - [`MoveError::CellOccupied`] if the square is taken
    /// - [`MoveError::GameAlreadyOver`] if the outcome is terminal
    /// - [`MoveError::WrongTurn`] if it is not `player`'s turn
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;

        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }
        if self.outcome.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        if player != self.to_move {
            return Err(MoveError::WrongTurn(player));
        }

        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.outcome = rules::evaluate(&self.board);
        if !self.outcome.is_terminal() {
            self.to_move = player.opponent();
        }
        debug!(%position, %player, outcome = %self.outcome, "Move applied");

        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated after move");
        }

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        }
        Ok(self.outcome)
    }

    /// Applies a [`Move`] record.
    pub fn apply(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        self.apply_move(mov.position.to_index(), mov.player)
    }

    /// Discards the game and starts a fresh one.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
