//! Outcome evaluation.

use super::{check_winner, is_full};
use crate::{Board, Outcome};
use tracing::instrument;

/// Determines the outcome of a board snapshot.
///
/// A completed line wins regardless of the rest of the board. Otherwise a
/// full board is a draw and anything else is still in progress.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        return Outcome::Won(player);
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "OXX/XOO/XXO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Player::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
