//! Tests for play configuration.

use noughts::PlayConfig;
use noughts_core::Player;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = PlayConfig::default();
    assert_eq!(*config.human(), None);
    assert_eq!(*config.computer_delay_ms(), 500);
    assert!(!*config.show_rules());
    assert_eq!(config.computer_delay(), Duration::from_millis(500));
}

#[test]
fn test_empty_file_uses_defaults() {
    assert_eq!(PlayConfig::from_toml("").unwrap(), PlayConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"O\"\ncomputer_delay_ms = 0\nshow_rules = true").unwrap();

    let config = PlayConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.human(), Some(Player::O));
    assert_eq!(*config.computer_delay_ms(), 0);
    assert!(*config.show_rules());
}

#[test]
fn test_load_without_path() {
    assert_eq!(PlayConfig::load(None).unwrap(), PlayConfig::default());
}

#[test]
fn test_overrides() {
    let config = PlayConfig::default()
        .with_human(Player::X)
        .with_computer_delay_ms(10)
        .with_show_rules(true);
    assert_eq!(*config.human(), Some(Player::X));
    assert_eq!(config.computer_delay(), Duration::from_millis(10));
    assert!(*config.show_rules());
}

#[test]
fn test_bad_config_rejected() {
    let err = PlayConfig::from_toml("human = \"Z\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let err = PlayConfig::from_toml("difficulty = 3").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}
