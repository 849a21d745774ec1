//! Tests for the console human player.

use noughts::{ConsolePlayer, play_with};
use noughts_core::{Board, Match, MinimaxPlayer, Move, MoveSource, Outcome, Player, ScriptedPlayer};
use std::io::Cursor;

#[test]
fn test_prompt_and_parse() {
    let mut player = ConsolePlayer::new("human", Cursor::new("11\n"), Vec::new());
    let mv = player.propose_move(&Board::new(), Player::X).unwrap();
    assert_eq!(mv, Some(Move::new(1, 1)));

    let output = String::from_utf8(player.into_output()).unwrap();
    assert_eq!(output, "Player X Select Move: ");
}

#[test]
fn test_unparseable_input_is_none() {
    let mut player = ConsolePlayer::new("human", Cursor::new("hello\n"), Vec::new());
    assert_eq!(player.propose_move(&Board::new(), Player::O).unwrap(), None);
}

#[test]
fn test_closed_input_is_an_error() {
    let mut player = ConsolePlayer::new("human", Cursor::new(""), Vec::new());
    let err = player.propose_move(&Board::new(), Player::X).unwrap_err();
    assert!(err.message.contains("Input closed"));
}

#[test]
fn test_reprompts_until_valid() {
    // Garbage, off the board, then legal; occupied, then legal; then the win.
    let input = Cursor::new("xy\n33\n00\n11\n01\n02\n");
    let human = ConsolePlayer::new("human", input, Vec::new());
    let opponent = ScriptedPlayer::from_moves("o", [Move::new(1, 1), Move::new(2, 2)]);

    let mut game = Match::new(human, opponent);
    let report = game.play().unwrap();
    assert_eq!(report.outcome, Outcome::WinFor(Player::X));
    assert_eq!(
        report.history,
        vec![
            Move::new(0, 0),
            Move::new(1, 1),
            Move::new(0, 1),
            Move::new(2, 2),
            Move::new(0, 2),
        ]
    );

    let output = String::from_utf8(game.player_x().output().clone()).unwrap();
    assert_eq!(output.matches("Invalid move.").count(), 3);
    assert_eq!(output.matches("Player X Select Move: ").count(), 6);
}

#[test]
fn test_human_loses_to_minimax_when_playing_badly() {
    // X always takes the next cell in row-major order and never blocks.
    let input = Cursor::new("00\n01\n02\n10\n11\n12\n20\n21\n22\n");
    let human = ConsolePlayer::new("human", input, Vec::new());

    let mut out = Vec::new();
    let report = play_with(human, MinimaxPlayer::new("engine"), None, &mut out, false).unwrap();
    assert_eq!(report.outcome.winner(), Some(Player::O));

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(" | | \n | | \n | | \n\n"));
    assert!(text.ends_with("The winner is Player O\n"));
    assert_eq!(
        report.history,
        vec![
            Move::new(0, 0),
            Move::new(1, 1),
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(1, 0),
            Move::new(2, 0),
        ]
    );
}
