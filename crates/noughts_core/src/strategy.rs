//! Fixed-heuristic move selection for the computer player.
//!
//! The computer walks an ordered list of rules and plays the first one that
//! yields a square. There is no search and no learning; the same board always
//! produces the same move. The cascade is beatable and is kept that way.

use crate::rules::evaluate;
use crate::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The step of the cascade that produced a move, in priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Rule {
    /// Complete a line for the computer.
    #[strum(to_string = "immediate win")]
    ImmediateWin,
    /// Occupy the square the human needs to complete a line.
    #[strum(to_string = "block opponent win")]
    BlockWin,
    /// Take the center.
    #[strum(to_string = "center")]
    Center,
    /// Answer a human corner with the diagonally opposite corner.
    #[strum(to_string = "opposite corner")]
    OppositeCorner,
    /// Human holds both corners of a diagonal; take an edge.
    #[strum(to_string = "block double threat")]
    BlockFork,
    /// Take any open corner.
    #[strum(to_string = "open corner")]
    OpenCorner,
    /// Take the first open square.
    #[strum(to_string = "first open square")]
    FirstOpen,
}

/// A chosen square together with the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    /// Square to play.
    pub position: Position,
    /// Rule that selected the square.
    pub rule: Rule,
}

impl Decision {
    fn new(position: Position, rule: Rule) -> Self {
        Self { position, rule }
    }
}

/// Picks the computer's next square, or `None` when the board is full.
///
/// `computer` and `human` must be different symbols.
pub fn select_move(board: &Board, computer: Player, human: Player) -> Option<Position> {
    decide(board, computer, human).map(|decision| decision.position)
}

/// Runs the rule cascade and reports which rule fired.
#[instrument(skip(board), fields(board = %board))]
pub fn decide(board: &Board, computer: Player, human: Player) -> Option<Decision> {
    let decision = cascade(board, computer, human);
    match decision {
        Some(Decision { position, rule }) => {
            debug!(%position, index = position.to_index(), %rule, "Computer chose square")
        }
        None => debug!("No open square left"),
    }
    decision
}

fn cascade(board: &Board, computer: Player, human: Player) -> Option<Decision> {
    if let Some(pos) = winning_square(board, computer) {
        return Some(Decision::new(pos, Rule::ImmediateWin));
    }

    if let Some(pos) = winning_square(board, human) {
        return Some(Decision::new(pos, Rule::BlockWin));
    }

    if board.is_empty(Position::Center) {
        return Some(Decision::new(Position::Center, Rule::Center));
    }

    if let Some(pos) = opposite_corner(board, human) {
        return Some(Decision::new(pos, Rule::OppositeCorner));
    }

    if let Some(pos) = fork_block(board, human) {
        return Some(Decision::new(pos, Rule::BlockFork));
    }

    if let Some(pos) = first_empty(board, &Position::CORNERS) {
        return Some(Decision::new(pos, Rule::OpenCorner));
    }

    first_empty(board, &Position::ALL).map(|pos| Decision::new(pos, Rule::FirstOpen))
}

/// First empty square where `player` would complete a line.
///
/// Each candidate is tried on its own copy of the board.
fn winning_square(board: &Board, player: Player) -> Option<Position> {
    board
        .empty_positions()
        .find(|&pos| evaluate(&board.with(pos, player)) == Outcome::Won(player))
}

fn opposite_corner(board: &Board, human: Player) -> Option<Position> {
    let held_by_human = |pos| board.get(pos) == Square::Occupied(human);
    for (a, b) in Position::OPPOSITE_CORNERS {
        if held_by_human(a) && board.is_empty(b) {
            return Some(b);
        }
        if held_by_human(b) && board.is_empty(a) {
            return Some(a);
        }
    }
    None
}

/// An edge square when the human holds both ends of a diagonal.
///
/// Returns `None` if no edge is free, letting the cascade move on.
fn fork_block(board: &Board, human: Player) -> Option<Position> {
    let held_by_human = |pos| board.get(pos) == Square::Occupied(human);
    let diagonal_held = Position::OPPOSITE_CORNERS
        .into_iter()
        .any(|(a, b)| held_by_human(a) && held_by_human(b));
    if diagonal_held {
        first_empty(board, &Position::EDGES)
    } else {
        None
    }
}

fn first_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|&pos| board.is_empty(pos))
}
