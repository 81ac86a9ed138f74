//! Scripted sessions through the orchestrator.

use solved_games::{ComputerPlayer, HumanPlayer, Orchestrator, Player};
use solved_tictactoe::{Mark, Outcome};
use std::time::Duration;

/// Runs a session with the human typing `script`, returning the orchestrator.
async fn session(human_mark: Mark, script: &'static str) -> Orchestrator<Vec<u8>> {
    let human: Box<dyn Player> = Box::new(HumanPlayer::new("Human", script.as_bytes()));
    let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
        "Computer",
        human_mark.opponent(),
        Duration::ZERO,
    ));
    let (player_x, player_o) = match human_mark {
        Mark::X => (human, computer),
        Mark::O => (computer, human),
    };

    let mut orchestrator = Orchestrator::new(player_x, player_o, human_mark, Vec::new());
    orchestrator.run().await.expect("Session failed");
    orchestrator
}

fn transcript(orchestrator: Orchestrator<Vec<u8>>) -> String {
    String::from_utf8(orchestrator.into_output()).expect("Output is UTF-8")
}

#[tokio::test]
async fn test_full_game_ends_in_draw() {
    let orchestrator = session(Mark::X, "4\n8\n1\n3\n6\nquit\n").await;
    assert_eq!(orchestrator.finished(), &[Outcome::Draw]);
    assert_eq!(orchestrator.game().board().notation(), "OXOXXOXOX");

    let text = transcript(orchestrator);
    assert!(text.contains("Computer (O) plays 0."));
    assert!(text.contains("It's a draw!"));
}

#[tokio::test]
async fn test_rejected_input_leaves_board_unchanged() {
    let orchestrator = session(Mark::X, "4\n4\n9\nfoo\nquit\n").await;
    assert!(orchestrator.finished().is_empty());
    assert_eq!(orchestrator.game().board().notation(), "O...X....");

    let text = transcript(orchestrator);
    assert!(text.contains("Center is already occupied. Try again."));
    assert!(text.contains("Index 9 is off the board (must be 0-8). Try again."));
    assert!(text.contains("Unrecognized input \"foo\""));
}

#[tokio::test]
async fn test_computer_opens_when_human_plays_o() {
    let orchestrator = session(Mark::O, "quit\n").await;
    assert_eq!(orchestrator.game().board().notation(), "X........");
    assert_eq!(orchestrator.game().to_move(), Mark::O);
}

#[tokio::test]
async fn test_moves_refused_after_game_over() {
    let orchestrator = session(Mark::X, "4\n8\n1\n3\n6\n5\nquit\n").await;
    assert_eq!(orchestrator.finished(), &[Outcome::Draw]);
    let text = transcript(orchestrator);
    assert!(text.contains("The game is over. Type reset to play again or quit to leave."));
}

#[tokio::test]
async fn test_reset_starts_fresh_game() {
    let orchestrator = session(Mark::X, "4\nreset\ncenter\nquit\n").await;
    // After the reset the human replays the center and the computer answers.
    assert_eq!(orchestrator.game().board().notation(), "O...X....");
    assert_eq!(orchestrator.game().history().len(), 2);
    assert!(transcript(orchestrator).contains("New game."));
}

#[tokio::test]
async fn test_end_of_input_quits() {
    let orchestrator = session(Mark::X, "4\n").await;
    assert_eq!(orchestrator.game().history().len(), 2);
}

#[tokio::test]
async fn test_self_play_is_a_draw() {
    let player_x = Box::new(ComputerPlayer::new("X", Mark::X, Duration::ZERO));
    let player_o = Box::new(ComputerPlayer::new("O", Mark::O, Duration::ZERO));
    let mut orchestrator = Orchestrator::new(player_x, player_o, Mark::X, Vec::new());
    orchestrator.run().await.unwrap();

    assert_eq!(orchestrator.finished(), &[Outcome::Draw]);
    assert!(!transcript(orchestrator).contains("Type reset"));
}
