//! History consistency invariant: the board is the replay of the history.

use super::Invariant;
use crate::{Board, GameState, Move};

/// Invariant: the history fully describes the board.
///
/// Turn numbers run 1..=n without gaps, the turn count equals the history
/// length, and replaying the history onto an empty board yields the board.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Checks that turn numbers are contiguous from 1.
    pub fn turns_contiguous(history: &[Move]) -> bool {
        history
            .iter()
            .zip(1u32..)
            .all(|(mv, expected)| mv.turn() == expected)
    }
}

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        Self::turns_contiguous(history)
            && usize::try_from(game.turn_count()).is_ok_and(|n| n == history.len())
            && game.board().occupied() == history.len()
            && Board::replay(history) == *game.board()
    }

    fn description() -> &'static str {
        "History replays to the board with contiguous turn numbers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_game_holds() {
        let game = GameState::replay(&[4, 0, 8]).expect("valid replay");
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_gap_in_turns_violates() {
        let history = [
            Move::new(Position::TopLeft, Player::X, 1),
            Move::new(Position::Center, Player::O, 3),
        ];
        assert!(!HistoryConsistentInvariant::turns_contiguous(&history));
    }

    #[test]
    fn test_holds_after_undo() {
        let mut game = GameState::replay(&[4, 0]).expect("valid replay");
        game.undo();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.history().len(), 1);
    }
}
