//! Game settings loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_tictactoe::{SetupError, TicTacToe, Token};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Player tokens in turn order, one character each.
    players: Vec<Token>,

    /// Number of games to play back to back.
    rounds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: vec![Token::X, Token::O],
            rounds: 1,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        info!(players = settings.players.len(), rounds = settings.rounds, "Settings loaded");
        Ok(settings)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces any value supplied on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, players: Option<Vec<char>>, rounds: Option<u32>) -> Self {
        if let Some(players) = players {
            self.players = players.into_iter().map(Token::from).collect();
        }
        if let Some(rounds) = rounds {
            self.rounds = rounds;
        }
        self
    }

    /// Builds the rule engine for the configured roster.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] for an empty, duplicated or reserved roster.
    pub fn build_rules(&self) -> Result<TicTacToe, SetupError> {
        TicTacToe::with_players(self.players.iter().copied())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::new("rounds must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.players(), &vec![Token::X, Token::O]);
        assert_eq!(*settings.rounds(), 1);
    }

    #[test]
    fn test_from_file() {
        let file = write_settings("players = [\"A\", \"B\"]\nrounds = 3\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.players(), &vec![Token::new('A'), Token::new('B')]);
        assert_eq!(*settings.rounds(), 3);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_settings("rounds = 2\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.players(), Settings::default().players());
    }

    #[test]
    fn test_multi_character_token_rejected() {
        let file = write_settings("players = [\"XX\", \"O\"]\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let file = write_settings("rounds = 0\n");
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_reports_location() {
        let err = Settings::from_file("/nonexistent/tictac.toml").unwrap_err();
        assert!(err.message.contains("Failed to read settings file"));
        assert!(err.file.ends_with("settings.rs"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let settings = Settings::default().with_overrides(Some(vec!['O', 'X']), Some(4));
        assert_eq!(settings.players(), &vec![Token::O, Token::X]);
        assert_eq!(*settings.rounds(), 4);
    }

    #[test]
    fn test_empty_roster_cannot_build_rules() {
        let settings = Settings::default().with_overrides(Some(Vec::new()), None);
        assert!(matches!(settings.build_rules(), Err(SetupError::TurnOrder(_))));
    }
}
