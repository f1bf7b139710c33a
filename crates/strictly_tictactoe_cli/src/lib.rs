//! Terminal front end for the strictly_tictactoe rules engine.
//!
//! The engine owns the rules; this crate only renders its state, reads moves
//! and announces results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use input::{InputError, PlayerCommand, parse_command};
pub use render::{announce, prompt, render_board};
pub use session::{play, replay};
