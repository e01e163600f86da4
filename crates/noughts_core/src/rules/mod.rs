//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here keeps state between
//! calls; the outcome is recomputed from the squares every time.

pub mod draw;
pub mod evaluate;
pub mod win;

pub use draw::is_full;
pub use evaluate::evaluate;
pub use win::{LINES, Line, check_winner, winning_line};
