//! Derived game outcome.

use crate::rules;
use crate::{Board, Player};
use tracing::instrument;

/// Outcome of a game, recomputed from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Moves are still expected.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Evaluates the board: a completed line first, then a full board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board) -> Self {
        if let Some(winner) = rules::check_winner(board) {
            Outcome::Won(winner)
        } else if rules::is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
