//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] holding three identical marks.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((player, line))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((
                Player::O,
                [Position::TopCenter, Position::Center, Position::BottomCenter]
            ))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_or_mixed() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_invalid_board() {
        // Both players hold a line; the earlier row is reported.
        let board = board_with(&[
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }
}
