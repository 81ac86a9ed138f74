//! Solved Games - Unified CLI
//!
//! Terminal tic-tac-toe against an optimal computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use solved_games::{analyze, render, ComputerPlayer, GameConfig, HumanPlayer, Orchestrator, Player};
use solved_tictactoe::{best_move, Board, Mark};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr and stay quiet by default so they don't interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            human,
            think_ms,
        } => run_play(config, human, think_ms).await,
        Command::BestMove { board, mark, json } => run_best_move(&board, mark, json),
        Command::Analyze { board, mark, json } => run_analyze(&board, mark, json),
        Command::SelfPlay { think_ms } => run_self_play(think_ms).await,
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
async fn run_play(config: Option<PathBuf>, human: Option<Mark>, think_ms: Option<u64>) -> Result<()> {
    let mut game_config = match config {
        Some(path) => GameConfig::from_file(&path)?,
        None => GameConfig::default(),
    };
    if let Some(mark) = human {
        game_config = game_config.with_human_mark(mark);
    }
    if let Some(ms) = think_ms {
        game_config = game_config.with_think_delay_ms(ms);
    }
    info!(?game_config, "Starting interactive game");

    let human_mark = *game_config.human_mark();
    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", BufReader::new(tokio::io::stdin())));
    let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
        "Computer",
        game_config.computer_mark(),
        game_config.think_delay(),
    ));
    let (player_x, player_o) = match human_mark {
        Mark::X => (human, computer),
        Mark::O => (computer, human),
    };

    println!("You play {}. Type 0-8 or a square name, reset to start over, quit to leave.", human_mark);
    let mut orchestrator = Orchestrator::new(player_x, player_o, human_mark, tokio::io::stdout());
    orchestrator.run().await?;

    let finished = orchestrator.finished();
    if !finished.is_empty() {
        let summary: Vec<String> = finished.iter().map(|o| o.to_string()).collect();
        println!("Games played: {}", summary.join(", "));
    }
    Ok(())
}

/// Print the search's choice for one board
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, mark: Mark, json: bool) -> Result<()> {
    let position = best_move(board, mark).context("No move to search for")?;
    if json {
        let value = serde_json::json!({
            "index": position.to_index(),
            "position": position,
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", position.to_index());
    }
    Ok(())
}

/// Print every legal move with its value
#[instrument(skip(board), fields(board = %board))]
fn run_analyze(board: &Board, mark: Mark, json: bool) -> Result<()> {
    let reports = analyze(board, mark).context("No moves to analyze")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("{}\n\n{} to move:\n{}", board.display(), mark, render(&reports));
    }
    Ok(())
}

/// Let the computer play both sides and print the result
#[instrument]
async fn run_self_play(think_ms: u64) -> Result<()> {
    let delay = Duration::from_millis(think_ms);
    let player_x = Box::new(ComputerPlayer::new("Computer X", Mark::X, delay));
    let player_o = Box::new(ComputerPlayer::new("Computer O", Mark::O, delay));

    let mut orchestrator = Orchestrator::new(player_x, player_o, Mark::X, tokio::io::stdout());
    orchestrator.run().await?;
    info!(outcome = ?orchestrator.game().outcome(), "Self-play finished");
    Ok(())
}
