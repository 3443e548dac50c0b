//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A single-character cell marker: a player's mark or the empty sentinel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Token(char);

impl Token {
    /// Marker held by cells nobody has claimed.
    pub const EMPTY: Token = Token('·');
    /// The first player.
    pub const X: Token = Token('X');
    /// The second player.
    pub const O: Token = Token('O');

    /// Wraps a character as a token.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// The character this token is drawn with.
    pub const fn symbol(self) -> char {
        self.0
    }

    /// True for the empty-cell sentinel.
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

impl From<char> for Token {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

/// Target cell of a move, as zero-based (column, row).
///
/// Coordinates are signed so that any input can be represented; the board
/// decides whether it is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({x}, {y})")]
pub struct Move {
    /// Column, counted from the left.
    pub x: i32,
    /// Row, counted from the top.
    pub y: i32,
}

impl Move {
    /// Creates a move at column `x`, row `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
