//! Tic-tac-toe rules and a scripted computer opponent.
//!
//! Two pure operations make up the public surface:
//!
//! - [`evaluate`] reports whether a board is won, drawn or still in play.
//! - [`select_move`] picks the computer's next square with a fixed rule
//!   cascade (win, block, center, opposite corner, fork block, corner,
//!   anything). [`decide`] does the same and also names the rule.
//!
//! Neither keeps state. The caller owns the board and applies moves.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Outcome, Player, Position, evaluate, select_move};
//!
//! let board: Board = "XX./.O./...".parse()?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(select_move(&board, Player::O, Player::X), Some(Position::TopRight));
//! # Ok::<(), noughts_core::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
mod strategy;
mod types;

pub use position::Position;
pub use rules::{LINES, Line, check_winner, evaluate, is_full, winning_line};
pub use strategy::{Decision, Rule, decide, select_move};
pub use types::{Board, BoardParseError, Outcome, Player, Square};
