//! Human player reading moves from a line-oriented console.

use noughts_core::{Board, Move, MoveError, MoveSource, Player, SourceError};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, warn};

/// A source of input lines.
///
/// `Stdin` reads through its own shared buffer on every call, so two
/// human players can alternate on one terminal without either holding the
/// lock between turns.
pub trait ReadLine {
    /// Appends the next line to `buf`, returning the number of bytes read.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl ReadLine for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> ReadLine for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: io::Read> ReadLine for io::BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player that types a row digit followed by a column digit (`01`, `22`).
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: ReadLine, W: Write> ConsolePlayer<R, W> {
    /// Creates a console player over the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Returns the output prompts are written to.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the player, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a row digit and a column digit from the start of `line`.
///
/// Returns `None` when either of the first two characters is not a digit.
/// The digits are not range-checked; the board does that.
pub fn parse_move(line: &str) -> Option<Move> {
    let mut digits = line.trim().chars().map(|c| c.to_digit(10));
    let row = digits.next()??;
    let col = digits.next()??;
    Some(Move::new(row as usize, col as usize))
}

impl<R: ReadLine, W: Write> MoveSource for ConsolePlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, _board), fields(name = %self.name))]
    fn propose_move(&mut self, _board: &Board, player: Player) -> Result<Option<Move>, SourceError> {
        write!(self.output, "Player {} Select Move: ", player)
            .and_then(|_| self.output.flush())
            .map_err(|e| SourceError::new(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| SourceError::new(format!("Failed to read move: {}", e)))?;
        if read == 0 {
            return Err(SourceError::new("Input closed before a move was entered"));
        }

        let mv = parse_move(&line);
        debug!(input = %line.trim(), ?mv, "Parsed console input");
        Ok(mv)
    }

    fn move_rejected(&mut self, error: &MoveError) {
        debug!(%error, "Console move rejected");
        if let Err(e) = writeln!(self.output, "Invalid move.") {
            warn!(error = %e, "Failed to report invalid move");
        }
    }
}
