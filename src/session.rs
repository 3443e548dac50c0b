//! Play sessions: one or more back-to-back games on a single UI.

use crate::Settings;
use anyhow::{Context, Result};
use tictac_engine::{Game, UiAdaptor};
use tictac_tictactoe::{BoardDisplay, Move, TicTacToe, Token};
use tracing::{info, instrument};

/// Plays `settings.rounds()` games of tic-tac-toe through `ui`.
///
/// Returns the rule engine and the UI after the last game so callers can
/// inspect the final position.
///
/// # Errors
///
/// Fails if the roster cannot start a game or the UI reports an I/O error.
/// Either ends the session.
#[instrument(skip(ui))]
pub fn play_session<U>(settings: &Settings, ui: U) -> Result<(TicTacToe, U)>
where
    U: UiAdaptor<Move, BoardDisplay, Token>,
{
    let rules = settings.build_rules().context("Invalid player roster")?;
    let mut game = Game::new(rules, ui);

    for round in 1..=*settings.rounds() {
        info!(round, "Starting round");
        let outcome = if round == 1 {
            game.run()
        } else {
            game.play_again()
        };
        outcome.with_context(|| format!("UI failed during round {round}"))?;
    }

    Ok(game.into_parts())
}
