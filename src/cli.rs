//! Command-line interface for solved_games.

use clap::{Parser, Subcommand};
use solved_tictactoe::{Board, Mark};
use std::path::PathBuf;

/// Solved Games - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "solved_games")]
#[command(about = "Tic-tac-toe against an optimal minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Mark the human plays (X moves first)
        #[arg(long)]
        human: Option<Mark>,

        /// Computer thinking delay in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Print the optimal move for a board
    BestMove {
        /// Board in compact notation, e.g. "XX..O...." (row-major, '.' for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark to move
        #[arg(short, long)]
        mark: Mark,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax value of every legal move
    Analyze {
        /// Board in compact notation, e.g. "XX..O...." (row-major, '.' for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark to move
        #[arg(short, long)]
        mark: Mark,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides
    SelfPlay {
        /// Delay between moves in milliseconds
        #[arg(long, default_value = "0")]
        think_ms: u64,
    },
}
