//! Authoritative game state: board, turn, and move history.

use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::{check_winner, is_full};
use super::{Board, Move, MoveError, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of moves that fill the board.
pub const MAX_TURNS: u32 = 9;

/// Current status of the game, derived from the board on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; holds the player to move.
    #[display("Next player: {}", _0)]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Complete game state.
///
/// The board is always the result of replaying `history` onto an empty
/// board. Mutation goes through [`apply_move`](Self::apply_move),
/// [`undo`](Self::undo) and [`reset`](Self::reset) only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    turn_count: u32,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game. X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            turn_count: 0,
            history: Vec::new(),
        }
    }

    /// Builds a game by applying `positions` (0-8) in order from a fresh start.
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(positions: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in positions {
            game.apply_move(pos)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of moves made since the last reset.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the winner, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.board)
    }

    /// Derives the game status.
    ///
    /// A winning line takes precedence over a full board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.turn_count == MAX_TURNS {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.current_player)
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Returns true if there is a move to undo.
    pub fn can_undo(&self) -> bool {
        self.turn_count > 0
    }

    /// Positions the current player may take. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Places the current player's mark at `position` (0-8).
    ///
    /// # Errors
    ///
    /// Rejects out-of-range indices, occupied squares, and moves after a
    /// win or draw. A rejected move changes nothing.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turn_count + 1))]
    pub fn apply_move(&mut self, position: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(position).ok_or(MoveError::OutOfBounds(position))?;

        if self.winner().is_some() || is_full(&self.board) {
            debug!("Rejected move: game is over");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mv = Move::new(pos, self.current_player, self.turn_count + 1);
        self.board.set(pos, Square::Occupied(mv.player()));
        self.history.push(mv);
        self.current_player = self.current_player.opponent();
        self.turn_count += 1;

        debug!(%mv, "Move applied");
        if let GameStatus::Won(winner) = self.status() {
            info!(%winner, turn = self.turn_count, "Game won");
        } else if self.status() == GameStatus::Draw {
            info!("Game drawn");
        }

        self.debug_check();
        Ok(mv)
    }

    /// Takes back the last move.
    ///
    /// The board is rebuilt from scratch by replaying the remaining history.
    /// Returns the removed move, or `None` if no move has been made.
    #[instrument(skip(self), fields(turn = self.turn_count))]
    pub fn undo(&mut self) -> Option<Move> {
        let undone = self.history.pop()?;

        self.board = Board::replay(&self.history);
        self.turn_count -= 1;
        // Valid only because turns strictly alternate.
        self.current_player = self.current_player.opponent();

        debug!(%undone, "Move undone");
        self.debug_check();
        Some(undone)
    }

    /// Returns to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Checks every game invariant against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    fn debug_check(&self) {
        debug_assert!(
            self.check_invariants().is_ok(),
            "game invariants violated: {:?}",
            self.check_invariants()
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
