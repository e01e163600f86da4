//! Game session: the authoritative state of one human-vs-computer game.
//!
//! The core crate only answers questions about board snapshots. The session
//! decides whose turn it is, applies moves, keeps the history and caches the
//! latest outcome.

use crate::action::{Move, MoveError};
use noughts_core::{Board, Decision, Line, Outcome, Player, Position, decide, evaluate, winning_line};
use tracing::{debug, info, instrument};

/// One game between a human and the computer.
///
/// The human always opens, whichever symbol they picked.
#[derive(Debug, Clone)]
pub struct GameSession {
    human: Player,
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a game where the human plays `human` and moves first.
    #[instrument]
    pub fn new(human: Player) -> Self {
        info!(%human, computer = %human.opponent(), "Starting game");
        Self {
            human,
            board: Board::new(),
            to_move: human,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// The human's symbol.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The computer's symbol, always the complement of the human's.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome as of the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    /// Returns true if the computer is due to move.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.computer()
    }

    /// Places the human's mark.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, it is the computer's turn, or the square
    /// is already taken.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn play_human(&mut self, position: Position) -> Result<Outcome, MoveError> {
        self.apply(Move::new(self.human, position))
    }

    /// Lets the computer pick and play a square.
    ///
    /// # Errors
    ///
    /// Fails if the game is over or it is the human's turn.
    #[instrument(skip(self), fields(computer = %self.computer()))]
    pub fn play_computer(&mut self) -> Result<Decision, MoveError> {
        self.check_turn(self.computer())?;
        let decision =
            decide(&self.board, self.computer(), self.human).ok_or(MoveError::NoMoveAvailable)?;
        self.apply(Move::new(self.computer(), decision.position))?;
        Ok(decision)
    }

    /// Clears the board for a new game with the same symbols.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len(), "Restarting game");
        *self = Self::new(self.human);
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }
        Ok(())
    }

    fn apply(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        self.check_turn(mov.player)?;
        if !self.board.is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }

        self.board = self.board.with(mov.position, mov.player);
        self.history.push(mov);
        self.outcome = evaluate(&self.board);
        self.to_move = mov.player.opponent();

        debug!(%mov, outcome = %self.outcome, "Move applied");
        if self.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        }
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_opens_with_either_symbol() {
        for human in [Player::X, Player::O] {
            let session = GameSession::new(human);
            assert_eq!(session.to_move(), human);
            assert_eq!(session.computer(), human.opponent());
            assert!(!session.is_computer_turn());
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(Player::X);
        session.play_human(Position::TopLeft).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(
            session.play_human(Position::TopCenter),
            Err(MoveError::WrongPlayer(Player::X))
        );
        session.play_computer().unwrap();
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(
            session.play_computer(),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }
}
