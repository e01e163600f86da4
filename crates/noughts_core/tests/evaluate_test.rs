//! Outcome evaluation over arbitrary boards.

use noughts_core::{Board, LINES, Outcome, Player, Square, check_winner, evaluate, is_full};
use proptest::prelude::*;

fn any_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(any_square()).prop_map(Board::from_squares)
}

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn has_line_for(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

proptest! {
    #[test]
    fn open_board_without_line_is_in_progress(board in any_board()) {
        prop_assume!(check_winner(&board).is_none());
        prop_assume!(!is_full(&board));
        prop_assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn completed_line_wins(
        board in any_board(),
        line in 0..LINES.len(),
        player in any_player()
    ) {
        let mut board = board;
        for pos in LINES[line] {
            board.set(pos, Square::Occupied(player));
        }
        prop_assume!(!has_line_for(&board, player.opponent()));
        prop_assert_eq!(evaluate(&board), Outcome::Won(player));
    }

    #[test]
    fn evaluate_is_repeatable(board in any_board()) {
        let first = evaluate(&board);
        prop_assert_eq!(evaluate(&board), first);
    }
}

#[test]
fn test_each_line_wins_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let board = line
                .into_iter()
                .fold(Board::new(), |board, pos| board.with(pos, player));
            assert_eq!(evaluate(&board), Outcome::Won(player), "line {line:?}");
        }
    }
}

#[test]
fn test_two_in_a_row_is_not_a_win() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::InProgress);
}

#[test]
fn test_every_full_board_without_line_is_draw() {
    let mut draws = 0;
    for bits in 0u32..512 {
        let squares = std::array::from_fn(|i| {
            if bits & (1 << i) == 0 {
                Square::Occupied(Player::X)
            } else {
                Square::Occupied(Player::O)
            }
        });
        let board = Board::from_squares(squares);
        match check_winner(&board) {
            Some(player) => assert_eq!(evaluate(&board), Outcome::Won(player)),
            None => {
                draws += 1;
                assert_eq!(evaluate(&board), Outcome::Draw, "{board}");
            }
        }
    }
    assert!(draws > 0);
}
