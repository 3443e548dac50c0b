//! Line-oriented console front end.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tictac_engine::UiAdaptor;
use tictac_tictactoe::{BoardDisplay, Move, Token};
use tracing::{debug, instrument};

/// Plays tic-tac-toe over a text reader and writer.
///
/// Moves are read as "column row", for example `2 0` for the top right
/// cell. Lines that are not two integers are re-prompted here and never
/// reach the rules.
#[derive(Debug)]
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
}

impl ConsoleUi<StdinLock<'static>, Stdout> {
    /// A console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    /// Creates a console over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses "column row" into a move.
///
/// Returns `None` unless the line holds exactly two integers.
#[instrument]
pub fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(x, y))
}

impl<R: BufRead, W: Write> UiAdaptor<Move, BoardDisplay, Token> for ConsoleUi<R, W> {
    fn on_game_start(&mut self) -> io::Result<()> {
        writeln!(self.output, "Game on!")
    }

    fn on_turn_start(&mut self, player: &Token, board: &BoardDisplay) -> io::Result<()> {
        writeln!(self.output, "Here's the board:\n{board}")?;
        writeln!(self.output, "{player} it's your turn")
    }

    #[instrument(skip(self))]
    fn receive_input(&mut self) -> io::Result<Move> {
        writeln!(
            self.output,
            "Please supply the column, then row for your move separated by a space (eg 2 0 for top right)"
        )?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a move was entered",
                ));
            }
            match parse_move(&line) {
                Some(mv) => return Ok(mv),
                None => {
                    debug!(input = line.trim_end(), "Malformed move input");
                    writeln!(
                        self.output,
                        "please supply an input of the form 'x y' for x, y in 0-2"
                    )?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn on_invalid_move(&mut self, error: &dyn std::error::Error) -> io::Result<()> {
        writeln!(self.output, "{error}")
    }

    fn on_turn_end(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    fn on_game_won(&mut self, board: &BoardDisplay, winner: &Token) -> io::Result<()> {
        writeln!(self.output, "{board}")?;
        writeln!(self.output, "{winner} wins!")?;
        self.output.flush()
    }

    fn on_game_drawn(&mut self, board: &BoardDisplay) -> io::Result<()> {
        writeln!(self.output, "{board}")?;
        writeln!(self.output, "It was a draw")?;
        self.output.flush()
    }
}
