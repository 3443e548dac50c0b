//! The contract a presentation layer implements to host a game.

use std::error::Error;
use std::io;

/// Callbacks the driver loop issues to the user interface.
///
/// `M` is the move type, `B` the board presentation and `P` the player
/// identifier of the rule-set being hosted. Every callback may fail with an
/// I/O error, which the driver treats as fatal.
pub trait UiAdaptor<M, B, P> {
    /// Called once before the first turn.
    fn on_game_start(&mut self) -> io::Result<()>;

    /// Called at the start of every turn.
    fn on_turn_start(&mut self, player: &P, board: &B) -> io::Result<()>;

    /// Blocks until the current player supplies a structurally valid move.
    ///
    /// Malformed input is the adaptor's to re-prompt for; only transport
    /// failures are returned as errors.
    fn receive_input(&mut self) -> io::Result<M>;

    /// Reports a move the rules rejected. The same turn is retried afterwards.
    fn on_invalid_move(&mut self, error: &dyn Error) -> io::Result<()>;

    /// Called after a move has been accepted.
    fn on_turn_end(&mut self) -> io::Result<()>;

    /// Reports a decisive result.
    fn on_game_won(&mut self, board: &B, winner: &P) -> io::Result<()>;

    /// Reports a game that ended without a winner.
    fn on_game_drawn(&mut self, board: &B) -> io::Result<()>;
}
