//! Tictac library - console tic-tac-toe on a generic game engine.
//!
//! # Architecture
//!
//! - **Engine** (`tictac_engine`): the `Rules` and `UiAdaptor` contracts and
//!   the driver loop that joins them
//! - **Rules** (`tictac_tictactoe`): the tic-tac-toe state machine
//! - **Console**: a `UiAdaptor` over any reader and writer
//! - **Settings**: roster and round count from TOML and the command line
//!
//! # Example
//!
//! ```no_run
//! use tictac::{ConsoleUi, Settings, play_session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! play_session(&settings, ConsoleUi::stdio())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod session;
mod settings;

pub use console::{ConsoleUi, parse_move};
pub use session::play_session;
pub use settings::{ConfigError, Settings};

// Crate-level exports - engine and rule-set
pub use tictac_engine::{Game, GameStatus, Rules, TurnGenerator, TurnOrderError, UiAdaptor};
pub use tictac_tictactoe::{
    BoardDisplay, BoardState, LineKind, MalformedBoard, Move, MoveError, SetupError, TicTacToe,
    Token, WinCondition,
};
