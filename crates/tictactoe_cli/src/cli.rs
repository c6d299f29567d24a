//! Command-line interface for the tic-tac-toe front-end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal, with undo
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with move history and undo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively
    Play,

    /// Apply a sequence of moves to a fresh game and print the result
    Replay {
        /// Positions numbered 1-9, row by row from the top-left
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the move history as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("parse");
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "1", "5", "9", "--json"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![1, 5, 9],
                json: true
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--config", "ttt.toml"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("ttt.toml")));
        assert_eq!(cli.command, Some(Command::Play));
    }
}
