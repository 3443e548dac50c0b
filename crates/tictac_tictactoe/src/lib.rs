//! Pure tic-tac-toe rule-set for the tictac engine.
//!
//! [`TicTacToe`] implements [`tictac_engine::Rules`] over an immutable
//! [`BoardState`]. Win detection walks a shrinking set of live
//! [`WinCondition`]s: once two players share a line it is dropped, and the
//! game is over as soon as a line is completed, no line can be completed any
//! more, or the board is full.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod rules;
mod types;
mod win;

pub use board::{BoardDisplay, BoardState, SIZE};
pub use error::{MalformedBoard, MoveError, SetupError};
pub use rules::TicTacToe;
pub use types::{Move, Token};
pub use win::{LineKind, WinCondition};
