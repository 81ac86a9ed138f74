//! Tests for loading game config files.

use solved_games::GameConfig;
use solved_tictactoe::Mark;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_from_file_reads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.toml");
    fs::write(&path, "human_mark = \"O\"\nthink_delay_ms = 0\n").expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Config should load");
    assert_eq!(*config.human_mark(), Mark::O);
    assert_eq!(*config.think_delay_ms(), 0);
    assert_eq!(config.computer_mark(), Mark::X);
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Config should load");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_wrong_type_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "think_delay_ms = \"slow\"\n").expect("Failed to write TOML");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
