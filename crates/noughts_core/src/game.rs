//! Turn alternation and termination.
//!
//! [`Game`] is the state machine: one validated placement per call to
//! [`Game::apply`], alternating from X, until a line is completed or the
//! board fills up. [`Match`] seats two [`MoveSource`]s around a game and
//! drives it to the end, re-requesting moves the board rejects.

use crate::action::MoveError;
use crate::players::{MoveSource, SourceError};
use crate::rules::check_win;
use crate::{Board, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game has ended; the outcome is never [`Outcome::Ongoing`].
    Finished(Outcome),
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

/// A single game: board, side to move, status and the moves played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// After the game ends this is the player who made the final move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the outcome, [`Outcome::Ongoing`] while in progress.
    pub fn outcome(&self) -> Outcome {
        match self.status {
            GameStatus::InProgress => Outcome::Ongoing,
            GameStatus::Finished(outcome) => outcome,
        }
    }

    /// Places the current player's mark and advances the state machine.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing anything if the game is over, the
    /// move is missing, off the board, or on an occupied cell.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply(&mut self, mv: Option<Move>) -> Result<GameStatus, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }
        let mv = self.board.validate(mv)?;

        self.board
            .set(mv, self.to_move)
            .map_err(|_| MoveError::OutOfBounds(mv))?;
        self.history.push(mv);

        if check_win(&self.board) {
            self.status = GameStatus::Finished(Outcome::WinFor(self.to_move));
        } else if self.board.is_full() {
            self.status = GameStatus::Finished(Outcome::Draw);
        } else {
            self.to_move = self.to_move.opponent();
        }

        debug_assert!(self.is_consistent(), "Game invariants violated");
        debug!(%mv, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Checks the invariants alternating play guarantees.
    ///
    /// X has as many marks as O or one more, the history accounts for every
    /// mark on the board, and the side to move matches the counts.
    pub fn is_consistent(&self) -> bool {
        let x = self.board.count(Player::X);
        let o = self.board.count(Player::O);
        let balanced = x == o || x == o + 1;
        let recorded = self.history.len() == x + o
            && self.history.iter().all(|mv| !self.board.is_empty(*mv));
        let turn = match self.status {
            GameStatus::InProgress if x == o => self.to_move == Player::X,
            GameStatus::InProgress => self.to_move == Player::O,
            GameStatus::Finished(_) => true,
        };
        balanced && recorded && turn
    }

    /// Replays a sequence of moves from the empty board.
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.apply(Some(*mv))?;
        }
        Ok(game)
    }

    /// Summarizes the game for the presentation layer.
    pub fn report(&self) -> GameReport {
        GameReport {
            outcome: self.outcome(),
            board: self.board.clone(),
            history: self.history.clone(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// End-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// How the game ended.
    pub outcome: Outcome,
    /// Final position.
    pub board: Board,
    /// Moves in the order they were played, starting with X.
    pub history: Vec<Move>,
}

/// Notifications emitted while a match is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to be asked for a move.
    TurnStarted {
        /// Player to move.
        player: Player,
        /// Position before the move.
        board: Board,
    },
    /// A proposal was refused and will be requested again.
    MoveRejected {
        /// Player whose proposal was refused.
        player: Player,
        /// Why it was refused.
        error: MoveError,
    },
    /// A move was placed on the board.
    MoveMade {
        /// Player who moved.
        player: Player,
        /// Where they played.
        mv: Move,
    },
    /// The game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Final position.
        board: Board,
    },
}

/// Orchestrates one game between two move sources.
pub struct Match<X, O> {
    game: Game,
    player_x: X,
    player_o: O,
    max_rejections: Option<usize>,
}

impl<X: MoveSource, O: MoveSource> Match<X, O> {
    /// Creates a new match; X moves first.
    pub fn new(player_x: X, player_o: O) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            max_rejections: None,
        }
    }

    /// Gives up on a turn after this many consecutive rejected proposals.
    pub fn with_max_rejections(mut self, limit: Option<usize>) -> Self {
        self.max_rejections = limit;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the player seated as X.
    pub fn player_x(&self) -> &X {
        &self.player_x
    }

    /// Returns the player seated as O.
    pub fn player_o(&self) -> &O {
        &self.player_o
    }

    /// Plays the game to completion without reporting progress.
    pub fn play(&mut self) -> Result<GameReport, SourceError> {
        self.run(|_| {})
    }

    /// Plays the game to completion, reporting every step to `on_event`.
    ///
    /// # Errors
    ///
    /// Fails if a source cannot produce a move at all, or if it exceeds the
    /// rejection limit. The board is never modified by a rejected move.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent)) -> Result<GameReport, SourceError> {
        info!("Starting game");

        while let GameStatus::InProgress = self.game.status() {
            let player = self.game.to_move();
            on_event(&GameEvent::TurnStarted {
                player,
                board: self.game.board().clone(),
            });

            let mv = self.request_move(player, &mut on_event)?;
            self.game
                .apply(Some(mv))
                .map_err(|e| SourceError::new(format!("Validated move was refused: {}", e)))?;
            on_event(&GameEvent::MoveMade { player, mv });
        }

        let report = self.game.report();
        info!(outcome = %report.outcome, moves = report.history.len(), "Game over");
        on_event(&GameEvent::GameOver {
            outcome: report.outcome,
            board: report.board.clone(),
        });
        Ok(report)
    }

    /// Asks the current player until it proposes a move the board accepts.
    fn request_move(
        &mut self,
        player: Player,
        on_event: &mut impl FnMut(&GameEvent),
    ) -> Result<Move, SourceError> {
        let mut rejections = 0;
        loop {
            let board = &self.game.board;
            let source: &mut dyn MoveSource = match player {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            let proposal = source.propose_move(board, player)?;
            match board.validate(proposal) {
                Ok(mv) => return Ok(mv),
                Err(error) => {
                    warn!(?player, name = %source.name(), %error, "Move rejected");
                    source.move_rejected(&error);
                    on_event(&GameEvent::MoveRejected { player, error });

                    rejections += 1;
                    if self.max_rejections.is_some_and(|limit| rejections >= limit) {
                        return Err(SourceError::new(format!(
                            "{} made {} invalid proposals in a row",
                            source.name(),
                            rejections
                        )));
                    }
                }
            }
        }
    }
}
