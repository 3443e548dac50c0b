//! Generic turn-based game engine.
//!
//! A game is any type implementing [`Rules`]; a front end is any type
//! implementing [`UiAdaptor`]. [`Game`] joins the two and runs the turn loop:
//!
//! 1. announce the game,
//! 2. for each turn, show the board, collect a move, retry rejected moves,
//! 3. report the winner or the draw.
//!
//! Rule errors are part of normal play and are handed back to the UI. UI
//! errors end the session.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adaptor;
mod game;
mod rules;
mod turns;

pub use adaptor::UiAdaptor;
pub use game::Game;
pub use rules::{GameStatus, Rules};
pub use turns::{TurnGenerator, TurnOrderError};
