//! Driver loop that plays any [`Rules`] through any [`UiAdaptor`].

use crate::{Rules, UiAdaptor};
use derive_getters::Getters;
use derive_new::new;
use std::io;
use tracing::{debug, info, instrument};

/// One game session: a rule-set and the UI that hosts it.
///
/// Move errors are retried: the UI is told and asked for another move for
/// the same player. UI errors are fatal and end [`Game::run`] immediately.
#[derive(Debug, Getters, new)]
pub struct Game<R, U> {
    /// The rule-set being played.
    rules: R,
    /// The presentation layer.
    ui: U,
}

impl<R, U> Game<R, U>
where
    R: Rules,
    U: UiAdaptor<R::Move, R::Board, R::Player>,
{
    /// Plays the current game to completion.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the UI. The game is abandoned at
    /// that point; there is no degraded mode.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        self.ui.on_game_start()?;
        info!("Game started");

        while !self.rules.is_over() {
            let player = self.rules.current_player();
            let board = self.rules.board();
            debug!(%player, "Turn started");
            self.ui.on_turn_start(&player, &board)?;
            self.play_turn()?;
            self.ui.on_turn_end()?;
        }

        let board = self.rules.board();
        match self.rules.winner() {
            Some(winner) => {
                info!(%winner, "Game won");
                self.ui.on_game_won(&board, &winner)
            }
            None => {
                info!("Game drawn");
                self.ui.on_game_drawn(&board)
            }
        }
    }

    /// Resets the rules and plays another game with the same UI.
    ///
    /// # Errors
    ///
    /// See [`Game::run`].
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> io::Result<()> {
        self.rules.new_game();
        self.run()
    }

    /// Consumes the session, returning the rules and the UI.
    pub fn into_parts(self) -> (R, U) {
        (self.rules, self.ui)
    }

    /// Collects input until the rules accept a move.
    fn play_turn(&mut self) -> io::Result<()> {
        loop {
            let mv = self.ui.receive_input()?;
            match self.rules.make_move(mv) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    debug!(%error, "Move rejected");
                    self.ui.on_invalid_move(&error)?;
                }
            }
        }
    }
}
