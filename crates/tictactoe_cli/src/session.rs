//! Interactive play loop and non-interactive replay.

use crate::{CliConfig, render};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_core::{GameState, Position};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands: 1-9 place a mark, u(ndo), r(eset), h(istory), q(uit), ? for help";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's mark.
    Place(Position),
    /// Take back the last move.
    Undo,
    /// Start over.
    Reset,
    /// Print the move history.
    History,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

impl Action {
    /// Parses one input line. Returns `None` for unrecognised input.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "u" | "undo" => Some(Action::Undo),
            "r" | "reset" => Some(Action::Reset),
            "h" | "history" => Some(Action::History),
            "?" | "help" => Some(Action::Help),
            "q" | "quit" | "exit" => Some(Action::Quit),
            other => Position::parse_user_input(other).map(Action::Place),
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// The screen is re-rendered after every action that changes the game.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(config: &CliConfig, input: R, mut output: W) -> Result<GameState> {
    let mut game = GameState::new();
    info!("Starting interactive game");

    writeln!(output, "{}", HELP)?;
    writeln!(output, "{}", render::render(&game, config))?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(action) = Action::parse(&line) else {
            writeln!(output, "Unrecognised input {:?}. {}", line.trim(), HELP)?;
            continue;
        };
        debug!(?action, "Handling action");

        match action {
            Action::Place(pos) => {
                if let Err(e) = game.apply_move(pos.to_index()) {
                    warn!(%e, "Move rejected");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            }
            Action::Undo => {
                if game.undo().is_none() {
                    writeln!(output, "Nothing to undo")?;
                    continue;
                }
            }
            Action::Reset => game.reset(),
            Action::History => {
                writeln!(output, "{}", render::render_history(&game))?;
                continue;
            }
            Action::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Action::Quit => break,
        }

        writeln!(output, "{}", render::render(&game, config))?;
    }

    info!(status = %game.status(), turns = game.turn_count(), "Game session ended");
    Ok(game)
}

/// Applies 1-indexed `moves` to a fresh game.
///
/// Fails on the first move the engine rejects.
#[instrument]
pub fn replay(moves: &[usize]) -> Result<GameState> {
    let mut game = GameState::new();
    for (i, &number) in moves.iter().enumerate() {
        let Some(index) = number.checked_sub(1) else {
            bail!("Move {} is position 0; positions are numbered 1-9", i + 1);
        };
        game.apply_move(index)
            .with_context(|| format!("Move {} (position {}) rejected", i + 1, number))?;
    }
    Ok(game)
}
