//! Error types for the tic-tac-toe rule-set.

use crate::Token;
use derive_more::{Display, Error, From};
use tictac_engine::TurnOrderError;

/// Why a move was rejected. The board is never modified when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the grid.
    #[display("The cell coordinates ({x}, {y}) are not valid. The board is a zero indexed 3x3 grid")]
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },

    /// The target cell already holds a mark.
    #[display("The cell ({x}, {y}) is occupied, choose another")]
    CellOccupied {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },
}

/// Board text with the wrong dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MalformedBoard {
    /// Not exactly three rows.
    #[display("Expected 3 rows, got {found}")]
    RowCount {
        /// Rows supplied.
        found: usize,
    },

    /// A row without exactly three cells.
    #[display("Row {row} has {found} cells, expected 3")]
    CellCount {
        /// Zero-based index of the offending row.
        row: usize,
        /// Cells supplied in that row.
        found: usize,
    },
}

/// A player roster that cannot run a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SetupError {
    /// The turn order could not be built.
    #[display("{_0}")]
    #[from]
    TurnOrder(TurnOrderError),

    /// A player tried to use the empty-cell marker.
    #[display("Token '{token}' is reserved for empty cells")]
    ReservedToken {
        /// The offending token.
        token: Token,
    },

    /// Two players share a token.
    #[display("Token '{token}' is used by more than one player")]
    DuplicateToken {
        /// The repeated token.
        token: Token,
    },
}
