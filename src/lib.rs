//! Solved Games - terminal front end for solved tic-tac-toe.
//!
//! The game logic and search live in [`solved_tictactoe`]. This crate is the
//! presentation side: it owns one game at a time, reads human moves from a
//! line-based input, asks the search for the computer's replies and prints
//! the board after each move.
//!
//! # Architecture
//!
//! - **Players**: a human reading lines of text, and a computer backed by
//!   the minimax search with a cosmetic thinking delay
//! - **Orchestrator**: turn loop, error reporting, reset and quit
//! - **Config**: TOML game settings
//! - **Report**: search analysis for the command line
//!
//! # Example
//!
//! ```no_run
//! use solved_games::{ComputerPlayer, GameConfig, HumanPlayer, Orchestrator};
//! use tokio::io::BufReader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let human = HumanPlayer::new("You", BufReader::new(tokio::io::stdin()));
//! let computer = ComputerPlayer::new("Computer", config.computer_mark(), config.think_delay());
//!
//! let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(computer), *config.human_mark(), tokio::io::stdout());
//! orchestrator.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::Orchestrator;

// Crate-level exports - Players
pub use players::{Action, ComputerPlayer, HumanPlayer, Player};

// Crate-level exports - Analysis
pub use report::{analyze, render, MoveReport};
