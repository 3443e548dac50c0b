//! Win conditions: the lines that end the game when one player fills them.

use crate::{BoardState, Move, SIZE, Token};
use std::collections::BTreeSet;
use std::fmt;

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LineKind {
    /// A vertical line.
    Column,
    /// A horizontal line.
    Row,
    /// A corner-to-corner line.
    Diagonal,
}

/// Three cells that win the game when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinCondition {
    kind: LineKind,
    /// (column, row) pairs.
    cells: [(usize, usize); SIZE],
}

impl WinCondition {
    /// Every win condition, in evaluation order: columns, rows, diagonals.
    pub const ALL: [WinCondition; 8] = [
        Self::new(LineKind::Column, [(0, 0), (0, 1), (0, 2)]),
        Self::new(LineKind::Column, [(1, 0), (1, 1), (1, 2)]),
        Self::new(LineKind::Column, [(2, 0), (2, 1), (2, 2)]),
        Self::new(LineKind::Row, [(0, 0), (1, 0), (2, 0)]),
        Self::new(LineKind::Row, [(0, 1), (1, 1), (2, 1)]),
        Self::new(LineKind::Row, [(0, 2), (1, 2), (2, 2)]),
        Self::new(LineKind::Diagonal, [(0, 0), (1, 1), (2, 2)]),
        Self::new(LineKind::Diagonal, [(0, 2), (1, 1), (2, 0)]),
    ];

    const fn new(kind: LineKind, cells: [(usize, usize); SIZE]) -> Self {
        Self { kind, cells }
    }

    /// Orientation of this line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The cells of this line as moves.
    pub fn cells(&self) -> [Move; SIZE] {
        self.cells.map(|(x, y)| Move::new(x as i32, y as i32))
    }

    /// Returns the player holding every cell of this line, if any.
    ///
    /// A line of three empty cells also has a single distinct token, so the
    /// empty marker is filtered out after the count.
    pub fn check(&self, board: &BoardState) -> Option<Token> {
        let tokens = self.distinct_tokens(board);
        if tokens.len() != 1 {
            return None;
        }
        tokens.into_iter().next().filter(|token| !token.is_empty())
    }

    /// True once two different players hold cells on this line, so no future
    /// move can complete it.
    pub fn is_eliminated(&self, board: &BoardState) -> bool {
        self.distinct_tokens(board)
            .iter()
            .filter(|token| !token.is_empty())
            .count()
            > 1
    }

    fn distinct_tokens(&self, board: &BoardState) -> BTreeSet<Token> {
        self.cells.iter().map(|&cell| board.token_at(cell)).collect()
    }
}

impl fmt::Display for WinCondition {
    /// Draws the line as `#` marks on an otherwise empty board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut diagram = BoardState::empty();
        for &cell in &self.cells {
            diagram.mark(cell, Token::new('#'));
        }
        write!(f, "{diagram}")
    }
}
