//! Reasons a move can be rejected.

use super::Position;

/// Why [`GameState::apply_move`](crate::GameState::apply_move) refused a move.
///
/// A rejected move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is not a board position.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game already has a winner or a full board.
    #[display("Game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            MoveError::OutOfBounds(12).to_string(),
            "Position 12 is out of bounds (must be 0-8)"
        );
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
