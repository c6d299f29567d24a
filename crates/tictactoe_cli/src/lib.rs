//! Terminal front-end for [`tictactoe_core`].
//!
//! Holds no game logic: it parses input, forwards it to a
//! [`GameState`](tictactoe_core::GameState), and re-renders.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError};
pub use session::{Action, play, replay};
