//! Tests for TOML game configuration.

use noughts::GameConfig;
use noughts_core::PlayerKind;
use std::io::Write;

#[test]
fn test_defaults_seat_human_against_minimax() {
    let config = GameConfig::default();
    assert_eq!(config.player_x(), &PlayerKind::Human);
    assert_eq!(config.player_o(), &PlayerKind::Minimax);
    assert_eq!(config.seed(), &None);
    assert_eq!(config.games(), &10);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = GameConfig::from_toml("player_o = \"random\"\nseed = 7\n").unwrap();
    assert_eq!(config.player_x(), &PlayerKind::Human);
    assert_eq!(config.player_o(), &PlayerKind::Random);
    assert_eq!(config.seed(), &Some(7));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
player_x = "minimax"
player_o = "random"
seed = 42
max_rejections = 3
games = 4
log_filter = "noughts=debug"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_x(), &PlayerKind::Minimax);
    assert_eq!(config.player_o(), &PlayerKind::Random);
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.max_rejections(), &Some(3));
    assert_eq!(config.games(), &4);
    assert_eq!(config.log_filter(), "noughts=debug");
}

#[test]
fn test_round_trip_through_toml() {
    let config = GameConfig::default()
        .with_player_x(Some(PlayerKind::Random))
        .with_seed(Some(9))
        .with_games(Some(3));
    let text = config.to_toml().unwrap();
    assert_eq!(GameConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_overrides_only_apply_when_given() {
    let config = GameConfig::from_toml("player_x = \"random\"\nseed = 1\n").unwrap();

    let unchanged = config.clone().with_player_x(None).with_seed(None).with_games(None);
    assert_eq!(unchanged, config);

    let changed = config.with_player_x(Some(PlayerKind::Minimax)).with_seed(Some(5));
    assert_eq!(changed.player_x(), &PlayerKind::Minimax);
    assert_eq!(changed.seed(), &Some(5));
}

#[test]
fn test_unknown_player_kind_is_rejected() {
    let err = GameConfig::from_toml("player_x = \"alphabeta\"\n").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
