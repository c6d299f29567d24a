//! Tic-tac-toe - terminal front-end.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, CliConfig, Command, play, render, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = io::stdin();
            play(&config, stdin.lock(), io::stdout())?;
        }
        Command::Replay { moves, json } => {
            let game = replay(&moves)?;
            info!(turns = game.turn_count(), "Replay complete");
            if json {
                println!("{}", serde_json::to_string_pretty(game.history())?);
            } else {
                print!("{}", render::render(&game, &config));
            }
        }
    }

    Ok(())
}
