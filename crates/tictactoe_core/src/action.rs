//! Move records kept in the game history.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A completed move: a player placing their mark at a position on a given turn.
///
/// Turns are numbered from 1 and increase by one per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    player: Player,
    turn: u32,
}

impl Move {
    /// Creates a new move record.
    pub fn new(position: Position, player: Player, turn: u32) -> Self {
        Self {
            position,
            player,
            turn,
        }
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the 1-based turn number.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Position as shown to players (1-9).
    pub fn display_position(&self) -> usize {
        self.position.display_number()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Turn {}: Player {} moved to position {}",
            self.turn,
            self.player,
            self.display_position()
        )
    }
}
