//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Move, Player};

/// Invariant: Players alternate turns, starting with X.
///
/// The player to move must match the parity of the history.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    /// Checks that `history` alternates starting with X and that
    /// `to_move` is the player after the last entry.
    pub fn sequence_holds(history: &[Move], to_move: Player) -> bool {
        if let Some(first) = history.first()
            && first.player() != Player::X
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player() == pair[1].player())
        {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        to_move == expected_next
    }
}

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        Self::sequence_holds(game.history(), game.current_player())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
