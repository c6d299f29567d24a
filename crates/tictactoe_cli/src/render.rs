//! Text rendering of a game for the terminal.

use crate::CliConfig;
use std::fmt::Write;
use tictactoe_core::{GameState, Position, rules::winning_line};

/// Renders the board with 1-indexed numbers in empty squares.
///
/// Squares on a winning line are wrapped in brackets.
pub fn render_board(game: &GameState) -> String {
    let line = winning_line(game.board()).map(|(_, line)| line);
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| {
                    let mark = match game.board().get(pos).player() {
                        Some(player) => player.to_string(),
                        None => pos.display_number().to_string(),
                    };
                    if line.is_some_and(|l| l.contains(&pos)) {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Renders the move history, one line per move.
pub fn render_history(game: &GameState) -> String {
    if game.history().is_empty() {
        return "Move History\n  (no moves yet)".to_string();
    }
    let mut out = String::from("Move History");
    for mv in game.history() {
        let _ = write!(out, "\n  {}", mv);
    }
    out
}

/// Renders the full screen: status, turn counter, board and history.
pub fn render(game: &GameState, config: &CliConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", game.status());
    if *config.show_turn() {
        let _ = writeln!(out, "Turn: {}", game.turn_count());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", render_board(game));
    if *config.show_history() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", render_history(game));
    }
    out
}
