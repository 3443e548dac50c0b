//! The contract every rule-set implements to plug into the driver loop.

use std::fmt::Display;

/// Outcome view of a rule-set at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus<P> {
    /// Moves can still be made.
    InProgress,
    /// The game ended with a winner.
    Won(P),
    /// The game ended without a winner.
    Drawn,
}

impl<P> GameStatus<P> {
    /// True for both terminal states.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// State machine of a turn-based game.
///
/// Queries describe the current position; commands change it. The driver
/// loop only ever talks to a game through this trait.
pub trait Rules {
    /// Input that identifies a move.
    type Move;
    /// Presentation of the board handed to the UI.
    type Board;
    /// Identifier of a player.
    type Player: Clone + Display;
    /// Reason a move was rejected.
    type Error: std::error::Error;

    /// Renders the current board.
    fn board(&self) -> Self::Board;

    /// The player whose turn it is.
    fn current_player(&self) -> Self::Player;

    /// Evaluates whether the game has ended.
    ///
    /// Takes `&mut self` because evaluation may cache what it learns about
    /// outcomes that can no longer happen.
    fn is_over(&mut self) -> bool;

    /// The winner recorded by the last call to [`Rules::is_over`].
    fn winner(&self) -> Option<Self::Player>;

    /// Resets to the initial position.
    fn new_game(&mut self);

    /// Plays `mv` for the current player.
    ///
    /// # Errors
    ///
    /// Returns the rule-set's error when the move is illegal; the state is
    /// left untouched in that case.
    fn make_move(&mut self, mv: Self::Move) -> Result<(), Self::Error>;

    /// Combines [`Rules::is_over`] and [`Rules::winner`].
    fn status(&mut self) -> GameStatus<Self::Player> {
        if !self.is_over() {
            return GameStatus::InProgress;
        }
        match self.winner() {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::Drawn,
        }
    }
}
