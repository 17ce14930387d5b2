//! Game engine for tic-tac-toe.
//!
//! [`Game`] owns the board and the active player. Moves that break the
//! rules are ignored rather than rejected with an error: the board and the
//! turn stay exactly as they were, and the returned [`Placement`] says why.

use crate::invariants;
use crate::outcome::Outcome;
use crate::rules;
use crate::{Board, Player, Position, Square};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Ignored {
    /// Index is not a board cell.
    #[display("Position {} out of bounds", _0)]
    OutOfBounds(usize),
    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of offering a move to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The active player's mark was placed.
    Placed(Position),
    /// The move was ignored; nothing changed.
    Ignored(Ignored),
}

impl Placement {
    /// Returns true if a mark was placed.
    pub fn is_placed(self) -> bool {
        matches!(self, Placement::Placed(_))
    }
}

/// Tic-tac-toe game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active player.
    ///
    /// Once the game is decided this stays on the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.board.occupied()
    }

    /// Evaluates the current outcome from the board.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        Outcome::evaluate(&self.board)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.evaluate().is_decided()
    }

    /// The first completed line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Positions that would accept a move. Empty once the game is decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the active player's mark at a board index (0-8).
    ///
    /// Out-of-range indices, occupied squares and moves after the game is
    /// decided are ignored.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Placement {
        match Position::try_from(index) {
            Ok(pos) => self.place(pos),
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                Placement::Ignored(Ignored::OutOfBounds(index))
            }
        }
    }

    /// Places the active player's mark at a position.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.is_decided() {
            debug!("Ignoring move, game is already over");
            return Placement::Ignored(Ignored::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Ignoring move, square is occupied");
            return Placement::Ignored(Ignored::Occupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        debug!(position = %pos, "Mark placed");

        match self.evaluate() {
            Outcome::InProgress => self.to_move = player.opponent(),
            Outcome::Won(winner) => info!(%winner, "Game won"),
            Outcome::Draw => info!("Game drawn"),
        }

        debug_assert_eq!(invariants::check_all(self), Ok(()));
        Placement::Placed(pos)
    }

    /// Clears the board and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.move_count(), "Resetting game");
        self.board = Board::new();
        self.to_move = Player::X;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
