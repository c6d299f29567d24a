//! Tic-tac-toe game engine with move history and undo.
//!
//! # Architecture
//!
//! - [`GameState`]: owns the board, the player to move, the turn counter
//!   and the move history. All mutation goes through
//!   [`GameState::apply_move`], [`GameState::undo`] and
//!   [`GameState::reset`].
//! - [`rules`]: pure functions over a [`Board`] snapshot (win and draw
//!   detection).
//! - [`invariants`]: properties every reachable state satisfies, checked
//!   after each mutation in debug builds.
//!
//! Undo rebuilds the board by replaying the remaining history rather
//! than reversing the last move.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for pos in [0, 4, 1, 3, 2] {
//!     game.apply_move(pos).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.undo();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use error::MoveError;
pub use position::Position;
pub use state::{GameState, GameStatus, MAX_TURNS};
pub use types::{Board, Player, Square};
