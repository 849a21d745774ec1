//! Seating players and running games for the command line.

use crate::config::GameConfig;
use crate::console::ConsolePlayer;
use anyhow::{Context, Result};
use noughts_core::{
    GameEvent, GameReport, Match, MinimaxPlayer, MoveSource, Outcome, Player, PlayerKind,
    RandomPlayer,
};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{info, instrument};

/// Builds the move source for one seat.
///
/// Random players seated as O get `seed + 1` so that two seeded random
/// players do not mirror each other.
#[instrument]
pub fn build_player(kind: PlayerKind, mark: Player, seed: Option<u64>) -> Box<dyn MoveSource> {
    let name = format!("{} ({})", kind, mark);
    match kind {
        PlayerKind::Human => Box::new(ConsolePlayer::new(name, io::stdin(), io::stdout())),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(name)),
        PlayerKind::Random => match seed {
            Some(seed) => {
                let offset = match mark {
                    Player::X => 0,
                    Player::O => 1,
                };
                Box::new(RandomPlayer::with_seed(name, seed.wrapping_add(offset)))
            }
            None => Box::new(RandomPlayer::new(name)),
        },
    }
}

/// Plays one game with the players from `config`, printing progress to `out`.
pub fn play(config: &GameConfig, out: &mut impl Write, json: bool) -> Result<GameReport> {
    let player_x = build_player(*config.player_x(), Player::X, *config.seed());
    let player_o = build_player(*config.player_o(), Player::O, *config.seed());
    play_with(player_x, player_o, *config.max_rejections(), out, json)
}

/// Plays one game between the given sources, printing progress to `out`.
///
/// In text mode the board is printed before every turn and once more at the
/// end, followed by the result line. In JSON mode only the final
/// [`GameReport`] is printed.
#[instrument(skip_all, fields(x = %player_x.name(), o = %player_o.name()))]
pub fn play_with<X: MoveSource, O: MoveSource>(
    player_x: X,
    player_o: O,
    max_rejections: Option<usize>,
    out: &mut impl Write,
    json: bool,
) -> Result<GameReport> {
    let mut game = Match::new(player_x, player_o).with_max_rejections(max_rejections);

    let mut written: io::Result<()> = Ok(());
    let report = game.run(|event| {
        if written.is_ok() && !json {
            written = write_event(out, event);
        }
    })?;
    written.context("Failed to write game progress")?;

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{}", text)?;
    }
    Ok(report)
}

fn write_event(out: &mut impl Write, event: &GameEvent) -> io::Result<()> {
    match event {
        GameEvent::TurnStarted { board, .. } => writeln!(out, "{}\n", board),
        GameEvent::MoveRejected { .. } => Ok(()),
        GameEvent::MoveMade { player, mv } => writeln!(out, "Player {} plays {}", player, mv),
        GameEvent::GameOver { outcome, board } => {
            writeln!(out, "{}\n", board)?;
            writeln!(out, "{}", outcome)
        }
    }
}

/// Results of a run of engine-only games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Records the outcome of one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WinFor(Player::X) => self.x_wins += 1,
            Outcome::WinFor(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    /// Number of games recorded.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `config.games()` engine-only games and tallies the results.
///
/// Game `i` uses seed `seed + 2 * i` so that seeded series are reproducible
/// without every game being identical.
#[instrument(skip_all, fields(games = *config.games()))]
pub fn series(config: &GameConfig, out: &mut impl Write, json: bool) -> Result<Tally> {
    for kind in [config.player_x(), config.player_o()] {
        if kind.is_interactive() {
            anyhow::bail!("Series games need engine players, got {}", kind);
        }
    }

    let mut tally = Tally::default();
    for i in 0..*config.games() {
        let seed = config.seed().map(|seed| seed.wrapping_add(2 * i as u64));
        let player_x = build_player(*config.player_x(), Player::X, seed);
        let player_o = build_player(*config.player_o(), Player::O, seed);
        let report = play_with(player_x, player_o, *config.max_rejections(), &mut io::sink(), false)
            .with_context(|| format!("Game {} of the series failed", i + 1))?;
        tally.record(report.outcome);
    }

    info!(%tally, "Series complete");
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&tally)?)?;
    } else {
        writeln!(out, "{}", tally)?;
    }
    Ok(tally)
}
