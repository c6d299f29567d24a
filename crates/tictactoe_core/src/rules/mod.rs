//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. They never look at history or
//! turn order, so they work on any board, including reconstructed ones.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};
