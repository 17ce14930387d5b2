//! Invariants for tic-tac-toe.
//!
//! Logical properties that hold throughout a game. The engine asserts them
//! in debug builds after every accepted move; tests check them directly.

use crate::{Board, Game, Player};
use derive_more::{Display, Error};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Checks a single invariant, reporting its description on failure.
pub fn check<I: Invariant<S>, S>(state: &S) -> Result<(), InvariantViolation> {
    if I::holds(state) {
        Ok(())
    } else {
        Err(InvariantViolation {
            description: I::description(),
        })
    }
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// While the game is undecided the side to move follows from the mark counts.
pub struct TurnMatchesBoard;

impl Invariant<Game> for TurnMatchesBoard {
    fn holds(game: &Game) -> bool {
        if game.is_decided() {
            return true;
        }
        let board = game.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Active player is X exactly when both players have the same number of marks"
    }
}

/// Checks every game invariant.
pub fn check_all(game: &Game) -> Result<(), InvariantViolation> {
    check::<MarkBalance, _>(game.board())?;
    check::<TurnMatchesBoard, _>(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_board_balanced() {
        assert!(MarkBalance::holds(&Board::new()));
    }

    #[test]
    fn test_two_extra_x_marks_violate_balance() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        let err = check::<MarkBalance, _>(&board).unwrap_err();
        assert_eq!(err.description, MarkBalance::description());
    }

    #[test]
    fn test_o_ahead_violates_balance() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_fresh_game_satisfies_all() {
        assert_eq!(check_all(&Game::new()), Ok(()));
    }
}
