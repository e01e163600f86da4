//! Noughts - play tic-tac-toe against a scripted computer.
//!
//! The rules and the computer's heuristic live in `noughts_core`. This crate
//! is the side that owns the game:
//!
//! - **Session**: board, turn order, history and outcome of one game
//! - **Config**: TOML settings for interactive play
//! - **Terminal**: the line-based front end

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod session;
mod terminal;

pub use action::{Move, MoveError};
pub use config::{ConfigError, PlayConfig};
pub use session::GameSession;
pub use terminal::{Command, run};
