//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tictac - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Player tokens in turn order, one character each (default: X O)
    #[arg(short, long, num_args = 1..)]
    pub players: Option<Vec<char>>,

    /// Number of games to play back to back
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,
}
