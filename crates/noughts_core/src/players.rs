//! Move sources: anything that can propose a move for a board.
//!
//! The game loop only depends on [`MoveSource`]. Which implementation sits
//! behind each mark is decided once, at setup, through [`PlayerKind`].

use crate::action::MoveError;
use crate::random::random_move;
use crate::search::best_move;
use crate::{Board, Move, Player};
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// A move source could not produce a move at all.
///
/// This is different from proposing an invalid move, which the game loop
/// handles by asking again.
#[derive(Debug, Clone, Display, Error)]
#[display("Move source error: {} at {}:{}", message, file, line)]
pub struct SourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SourceError {
    /// Creates a new source error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<crate::search::SearchError> for SourceError {
    #[track_caller]
    fn from(err: crate::search::SearchError) -> Self {
        Self::new(format!("Search failed: {}", err))
    }
}

/// Something that can choose where to play next.
pub trait MoveSource {
    /// Returns the display name of this source.
    fn name(&self) -> &str;

    /// Proposes a move for `player` on `board`.
    ///
    /// `Ok(None)` means the source produced something unusable (for example
    /// unparseable input); the game loop treats it like any invalid move and
    /// asks again.
    fn propose_move(&mut self, board: &Board, player: Player) -> Result<Option<Move>, SourceError>;

    /// Called when the last proposal was rejected, before the next request.
    fn move_rejected(&mut self, _error: &MoveError) {}
}

impl<T: MoveSource + ?Sized> MoveSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn propose_move(&mut self, board: &Board, player: Player) -> Result<Option<Move>, SourceError> {
        (**self).propose_move(board, player)
    }

    fn move_rejected(&mut self, error: &MoveError) {
        (**self).move_rejected(error)
    }
}

/// The kinds of player that can be seated at setup time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// A person at the console.
    Human,
    /// The exhaustive minimax engine.
    Minimax,
    /// Uniformly random legal moves.
    Random,
}

impl PlayerKind {
    /// True if this kind needs someone to type moves.
    pub fn is_interactive(self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

/// Plays the optimal move found by exhaustive search.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for MinimaxPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, board), fields(name = %self.name))]
    fn propose_move(&mut self, board: &Board, player: Player) -> Result<Option<Move>, SourceError> {
        // Search on a scratch copy; the caller's board stays untouched.
        let mut scratch = board.clone();
        let mv = best_move(&mut scratch, player)?;
        debug!(%mv, "Minimax chose move");
        Ok(Some(mv))
    }
}

/// Plays a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a random player with a reproducible sequence of moves.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, board), fields(name = %self.name))]
    fn propose_move(&mut self, board: &Board, player: Player) -> Result<Option<Move>, SourceError> {
        let mv = random_move(board, &mut self.rng)
            .ok_or_else(|| SourceError::new("No empty cells to choose from"))?;
        debug!(%mv, "Random player chose move");
        Ok(Some(mv))
    }
}

/// Replays a fixed list of proposals, in order.
///
/// Entries may be `None` or invalid on purpose, to exercise rejection.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    script: VecDeque<Option<Move>>,
    rejections: Vec<MoveError>,
}

impl ScriptedPlayer {
    /// Creates a scripted player from a list of proposals.
    pub fn new(name: impl Into<String>, script: impl IntoIterator<Item = Option<Move>>) -> Self {
        Self {
            name: name.into(),
            script: script.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Creates a scripted player that only proposes the given moves.
    pub fn from_moves(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self::new(name, moves.into_iter().map(Some))
    }

    /// Rejections reported back to this player so far.
    pub fn rejections(&self) -> &[MoveError] {
        &self.rejections
    }
}

impl MoveSource for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose_move(&mut self, _board: &Board, _player: Player) -> Result<Option<Move>, SourceError> {
        self.script
            .pop_front()
            .ok_or_else(|| SourceError::new(format!("{} ran out of scripted moves", self.name)))
    }

    fn move_rejected(&mut self, error: &MoveError) {
        self.rejections.push(*error);
    }
}
