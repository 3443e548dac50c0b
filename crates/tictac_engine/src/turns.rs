//! Round-robin turn order.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised when a turn order cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnOrderError {
    /// No players were supplied.
    #[display("Cannot build a turn order from an empty player list")]
    EmptyPlayerList,
}

/// Infinite, restartable cycle over a fixed list of players.
///
/// The cursor always points at the player returned by the next call to
/// [`TurnGenerator::next_player`]; it wraps to index 0 after the last player,
/// so the sequence has a period equal to the number of players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnGenerator<P> {
    players: Vec<P>,
    cursor: usize,
}

impl<P: Clone> TurnGenerator<P> {
    /// Creates a turn order over `players`, starting with the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`TurnOrderError::EmptyPlayerList`] if `players` is empty.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<P>) -> Result<Self, TurnOrderError> {
        if players.is_empty() {
            return Err(TurnOrderError::EmptyPlayerList);
        }
        Ok(Self { players, cursor: 0 })
    }

    /// Creates a turn order that cannot be empty.
    pub fn starting_with(first: P, rest: impl IntoIterator<Item = P>) -> Self {
        let players = std::iter::once(first).chain(rest).collect();
        Self { players, cursor: 0 }
    }

    /// Returns the next player and advances the cursor.
    pub fn next_player(&mut self) -> P {
        let player = self.players[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.players.len();
        player
    }

    /// Rewinds to the first player.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// The players in turn order.
    pub fn players(&self) -> &[P] {
        &self.players
    }

    /// Number of players in the rotation.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; an empty rotation cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<P: Clone> Iterator for TurnGenerator<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        Some(self.next_player())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
