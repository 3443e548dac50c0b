//! Immutable 3x3 board.

use crate::{MalformedBoard, Move, MoveError, Token};
use derive_more::{Display, From};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Rendered board handed to user interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
#[display("{_0}")]
pub struct BoardDisplay(String);

impl BoardDisplay {
    /// The rendered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoardDisplay {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Grid of tokens at one point in a game.
///
/// A board is never changed in place during play: [`BoardState::apply_move`]
/// returns a successor with exactly one empty cell claimed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    /// Rows top to bottom, each holding columns left to right.
    cells: [[Token; SIZE]; SIZE],
}

impl BoardState {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Token::EMPTY; SIZE]; SIZE],
        }
    }

    /// Parses newline-separated rows of single-character tokens.
    ///
    /// A single trailing newline is accepted, so the output of
    /// [`BoardState::display`] parses back.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedBoard`] unless there are exactly 3 rows of exactly
    /// 3 cells.
    #[instrument]
    pub fn from_text(raw: &str) -> Result<Self, MalformedBoard> {
        let rows: Vec<&str> = raw.lines().collect();
        if rows.len() != SIZE {
            return Err(MalformedBoard::RowCount { found: rows.len() });
        }

        let mut cells = [[Token::EMPTY; SIZE]; SIZE];
        for (row, text) in rows.into_iter().enumerate() {
            let tokens: Vec<Token> = text.chars().map(Token::from).collect();
            if tokens.len() != SIZE {
                return Err(MalformedBoard::CellCount {
                    row,
                    found: tokens.len(),
                });
            }
            cells[row].copy_from_slice(&tokens);
        }

        Ok(Self { cells })
    }

    /// Returns the token at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside `0..3`.
    pub fn get_cell(&self, x: i32, y: i32) -> Result<Token, MoveError> {
        let (col, row) = Self::index(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        Ok(self.cells[row][col])
    }

    /// Number of cells still holding [`Token::EMPTY`].
    pub fn count_empty_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|token| token.is_empty())
            .count()
    }

    /// Returns a copy of this board with `player` placed at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates off the grid and
    /// [`MoveError::CellOccupied`] if the cell is taken.
    #[instrument(skip(self))]
    pub fn apply_move(&self, player: Token, mv: Move) -> Result<Self, MoveError> {
        let Move { x, y } = mv;
        let (col, row) = Self::index(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        if !self.cells[row][col].is_empty() {
            return Err(MoveError::CellOccupied { x, y });
        }

        let mut next = self.clone();
        next.cells[row][col] = player;
        Ok(next)
    }

    /// Renders the grid as three lines of concatenated tokens.
    pub fn display(&self) -> BoardDisplay {
        BoardDisplay(self.to_string())
    }

    /// Token at an in-range cell.
    pub(crate) fn token_at(&self, (col, row): (usize, usize)) -> Token {
        self.cells[row][col]
    }

    /// Overwrites an in-range cell. Only used to draw diagrams.
    pub(crate) fn mark(&mut self, (col, row): (usize, usize), token: Token) {
        self.cells[row][col] = token;
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < SIZE)?;
        let row = usize::try_from(y).ok().filter(|&r| r < SIZE)?;
        Some((col, row))
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.cells.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for token in row {
                write!(f, "{token}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = MalformedBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_cells_are_empty() {
        let board = BoardState::empty();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(board.get_cell(x, y), Ok(Token::EMPTY));
            }
        }
        assert_eq!(board.count_empty_cells(), 9);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = BoardState::empty();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
            assert_eq!(board.get_cell(x, y), Err(MoveError::OutOfBounds { x, y }));
            assert_eq!(
                board.apply_move(Token::X, Move::new(x, y)),
                Err(MoveError::OutOfBounds { x, y })
            );
        }
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let board = BoardState::empty();
        let next = board.apply_move(Token::X, Move::new(2, 0)).unwrap();

        assert_eq!(board, BoardState::empty());
        assert_eq!(next.get_cell(2, 0), Ok(Token::X));
        assert_eq!(next.count_empty_cells(), 8);
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let board = BoardState::empty()
            .apply_move(Token::X, Move::new(1, 1))
            .unwrap();
        let before = board.clone();

        let result = board.apply_move(Token::O, Move::new(1, 1));

        assert_eq!(result, Err(MoveError::CellOccupied { x: 1, y: 1 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_layout() {
        let board = BoardState::empty()
            .apply_move(Token::X, Move::new(0, 0))
            .unwrap()
            .apply_move(Token::O, Move::new(2, 2))
            .unwrap();
        assert_eq!(board.display().as_str(), "X··\n···\n··O");
    }

    #[test]
    fn test_from_text_accepts_trailing_newline() {
        let board = BoardState::from_text("X··\n·O·\n··X\n").unwrap();
        assert_eq!(board.get_cell(1, 1), Ok(Token::O));
        assert_eq!(board.get_cell(2, 2), Ok(Token::X));
    }

    #[test]
    fn test_from_text_wrong_row_count() {
        assert_eq!(
            BoardState::from_text("···\n···"),
            Err(MalformedBoard::RowCount { found: 2 })
        );
        assert_eq!(
            BoardState::from_text("···\n···\n···\n···"),
            Err(MalformedBoard::RowCount { found: 4 })
        );
        assert_eq!(BoardState::from_text(""), Err(MalformedBoard::RowCount { found: 0 }));
    }

    #[test]
    fn test_from_text_wrong_cell_count() {
        assert_eq!(
            "···\n··\n···".parse::<BoardState>(),
            Err(MalformedBoard::CellCount { row: 1, found: 2 })
        );
        assert_eq!(
            BoardState::from_text("····\n···\n···"),
            Err(MalformedBoard::CellCount { row: 0, found: 4 })
        );
    }
}
