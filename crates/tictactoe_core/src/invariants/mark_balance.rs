//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{Board, GameState, Player};

/// Invariant: X count equals O count, or exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance on a bare board.
    pub fn board_holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }
}

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        Self::board_holds(game.board())
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_balanced_boards_hold() {
        let mut board = Board::new();
        assert!(MarkBalanceInvariant::board_holds(&board));

        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(MarkBalanceInvariant::board_holds(&board));

        board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MarkBalanceInvariant::board_holds(&board));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }
}
