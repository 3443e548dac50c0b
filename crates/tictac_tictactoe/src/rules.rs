//! Game logic and rules for tic-tac-toe.

use crate::{BoardDisplay, BoardState, Move, MoveError, SetupError, Token, WinCondition};
use std::collections::BTreeSet;
use tictac_engine::{Rules, TurnGenerator};
use tracing::{debug, info, instrument};

/// Tic-tac-toe rule engine.
///
/// Tracks the board, whose turn it is, and the win conditions that can
/// still be completed. [`Rules::is_over`] prunes lines that two players have
/// both claimed, so the set of live conditions only ever shrinks within a
/// game.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    board: BoardState,
    current_player: Token,
    turns: TurnGenerator<Token>,
    live: Vec<WinCondition>,
    winner: Option<Token>,
}

impl TicTacToe {
    /// Creates a game for X and O, with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_turns(TurnGenerator::starting_with(Token::X, [Token::O]))
    }

    /// Creates a game for a custom roster; the first token moves first.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the roster is empty, repeats a token or
    /// uses [`Token::EMPTY`].
    #[instrument(skip(players))]
    pub fn with_players(players: impl IntoIterator<Item = Token>) -> Result<Self, SetupError> {
        let players: Vec<Token> = players.into_iter().collect();
        let mut seen = BTreeSet::new();
        for &token in &players {
            if token.is_empty() {
                return Err(SetupError::ReservedToken { token });
            }
            if !seen.insert(token) {
                return Err(SetupError::DuplicateToken { token });
            }
        }

        let turns = TurnGenerator::new(players)?;
        Ok(Self::from_turns(turns))
    }

    fn from_turns(mut turns: TurnGenerator<Token>) -> Self {
        turns.reset();
        let current_player = turns.next_player();
        Self {
            board: BoardState::empty(),
            current_player,
            turns,
            live: WinCondition::ALL.to_vec(),
            winner: None,
        }
    }

    /// The current board.
    pub fn board_state(&self) -> &BoardState {
        &self.board
    }

    /// Win conditions not yet proven unreachable.
    pub fn live_conditions(&self) -> &[WinCondition] {
        &self.live
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Token] {
        self.turns.players()
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for TicTacToe {
    type Move = Move;
    type Board = BoardDisplay;
    type Player = Token;
    type Error = MoveError;

    fn board(&self) -> BoardDisplay {
        self.board.display()
    }

    fn current_player(&self) -> Token {
        self.current_player
    }

    /// Scans the live win conditions.
    ///
    /// The first condition in fixed order that is met records the winner and
    /// stops the scan; nothing is pruned on that call. Otherwise every
    /// condition found eliminated during the scan is dropped from the live
    /// set. The game is over on a win, when no condition is live, or when
    /// the board is full.
    #[instrument(skip(self), fields(live = self.live.len()))]
    fn is_over(&mut self) -> bool {
        // The winner is final until the next game.
        if self.winner.is_some() {
            return true;
        }

        let mut eliminated = vec![false; self.live.len()];
        let mut found = None;

        for (idx, condition) in self.live.iter().enumerate() {
            if condition.is_eliminated(&self.board) {
                eliminated[idx] = true;
                continue;
            }
            if let Some(winner) = condition.check(&self.board) {
                debug!(%winner, line = %condition.kind(), "Win condition met");
                found = Some(winner);
                break;
            }
        }

        if let Some(winner) = found {
            info!(%winner, "Game won");
            self.winner = Some(winner);
            return true;
        }

        let before = self.live.len();
        self.live = self
            .live
            .iter()
            .zip(&eliminated)
            .filter(|(_, gone)| !**gone)
            .map(|(condition, _)| *condition)
            .collect();
        if self.live.len() < before {
            debug!(
                pruned = before - self.live.len(),
                remaining = self.live.len(),
                "Pruned unreachable win conditions"
            );
        }

        self.live.is_empty() || self.board.count_empty_cells() == 0
    }

    fn winner(&self) -> Option<Token> {
        self.winner
    }

    #[instrument(skip(self))]
    fn new_game(&mut self) {
        self.board = BoardState::empty();
        self.live = WinCondition::ALL.to_vec();
        self.turns.reset();
        self.current_player = self.turns.next_player();
        self.winner = None;
        debug!(first = %self.current_player, "New game");
    }

    #[instrument(skip(self), fields(player = %self.current_player))]
    fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board = self.board.apply_move(self.current_player, mv)?;
        self.current_player = self.turns.next_player();
        debug!(next = %self.current_player, "Move applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut TicTacToe, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            game.make_move(Move::new(x, y)).unwrap();
        }
    }

    #[test]
    fn test_pruning_drops_blocked_lines() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (1, 0)]);

        assert!(!game.is_over());
        // The top row now holds both X and O.
        assert_eq!(game.live_conditions().len(), 7);
        assert!(!game.live_conditions().contains(&WinCondition::ALL[3]));
    }

    #[test]
    fn test_no_pruning_on_winning_scan() {
        let mut game = TicTacToe::new();
        // O at (0,0) and X at (0,1) block the left column, which is scanned
        // before the middle row that X completes.
        play(&mut game, &[(0, 1), (0, 0), (1, 1), (1, 0), (2, 1)]);
        assert!(WinCondition::ALL[0].is_eliminated(game.board_state()));

        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Token::X));
        assert_eq!(game.live_conditions().len(), WinCondition::ALL.len());
    }

    #[test]
    fn test_game_over_when_every_line_blocked() {
        let mut game = TicTacToe::new();
        // X O X / X O O / O X · : every line is mixed with one cell free.
        play(
            &mut game,
            &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2)],
        );

        assert_eq!(game.board_state().count_empty_cells(), 1);
        assert!(game.is_over());
        assert!(game.live_conditions().is_empty());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_repeated_is_over_is_stable() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(1, 1), (0, 0), (2, 2)]);

        let first = game.is_over();
        let live = game.live_conditions().to_vec();
        assert_eq!(game.is_over(), first);
        assert_eq!(game.live_conditions(), live.as_slice());
    }

    #[test]
    fn test_setup_rejects_bad_rosters() {
        assert_eq!(
            TicTacToe::with_players([]).unwrap_err(),
            SetupError::from(tictac_engine::TurnOrderError::EmptyPlayerList)
        );
        assert_eq!(
            TicTacToe::with_players([Token::X, Token::X]).unwrap_err(),
            SetupError::DuplicateToken { token: Token::X }
        );
        assert_eq!(
            TicTacToe::with_players([Token::X, Token::EMPTY]).unwrap_err(),
            SetupError::ReservedToken { token: Token::EMPTY }
        );
    }

    #[test]
    fn test_custom_roster_order() {
        let mut game = TicTacToe::with_players(['A', 'B', 'C'].map(Token::from)).unwrap();
        assert_eq!(game.current_player(), Token::new('A'));
        play(&mut game, &[(0, 0), (1, 1)]);
        assert_eq!(game.current_player(), Token::new('C'));
        play(&mut game, &[(2, 2)]);
        assert_eq!(game.current_player(), Token::new('A'));
    }
}
