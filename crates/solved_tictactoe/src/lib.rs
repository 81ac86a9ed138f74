//! Solved tic-tac-toe.
//!
//! Game state, rules and an exhaustive minimax search for a 3x3
//! three-in-a-row game. Presentation is left to the caller, which owns a
//! [`GameState`], feeds it moves with [`GameState::apply_move`] and asks
//! [`best_move`] for the computer's reply.
//!
//! # Example
//!
//! ```
//! use solved_tictactoe::{best_move, GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! game.apply_move(4, Player::X)?;
//!
//! let reply = best_move(game.board(), Player::O)?;
//! let outcome = game.apply_move(reply.to_index(), Player::O)?;
//! assert_eq!(outcome, Outcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::WIN_LINES;
pub use search::{best_move, move_values, SearchError};
pub use types::{Board, BoardParseError, Player, Square};

/// Alias matching the game's vocabulary: a player's mark in a cell.
pub type Mark = Player;
