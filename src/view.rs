//! Frontend-neutral view of a game.
//!
//! Both frontends rebuild a [`BoardView`] from the [`Game`] after every event
//! and render only from it, so the status texts and the rules for which cells
//! accept clicks live in one place.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use noughts_tictactoe::{Game, Outcome, Player, Position, Square};
use tracing::instrument;

/// Label of the restart control.
pub const RESTART_LABEL: &str = "Restart Game";

/// Window and terminal title.
pub const TITLE: &str = "Tic-Tac-Toe";

/// Text of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// Waiting for a player's move.
    #[display("Player {}'s Turn", _0)]
    Turn(Player),
    /// A player completed a line.
    #[display("Player {} Wins!", _0)]
    Won(Player),
    /// Full board, no line.
    #[display("It's a Draw!")]
    Draw,
}

impl Status {
    /// Status for the game as it stands.
    pub fn of(game: &Game) -> Self {
        match game.evaluate() {
            Outcome::InProgress => Status::Turn(game.to_move()),
            Outcome::Won(player) => Status::Won(player),
            Outcome::Draw => Status::Draw,
        }
    }
}

/// How one cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CellView {
    /// Board position of the cell.
    position: Position,
    /// Mark in the cell, if any.
    mark: Option<Player>,
    /// Whether a click on this cell would place a mark.
    clickable: bool,
    /// Whether the cell is part of the winning line.
    highlighted: bool,
}

impl CellView {
    /// Text shown in the cell: the mark, or nothing.
    pub fn label(&self) -> &'static str {
        match self.mark {
            Some(Player::X) => "X",
            Some(Player::O) => "O",
            None => "",
        }
    }
}

/// Snapshot of everything a frontend draws.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    /// Cells in row-major order.
    cells: [CellView; 9],
    /// Status line.
    status: Status,
    /// False once the game is decided; cells stop accepting clicks.
    accepting_input: bool,
}

impl BoardView {
    /// Builds the view of a game.
    #[instrument(skip(game))]
    pub fn of(game: &Game) -> Self {
        let accepting_input = !game.is_decided();
        let line = game.winning_line();
        let board = game.board();

        let cells = Position::ALL.map(|position| {
            let square = board.get(position);
            CellView::new(
                position,
                square.player(),
                accepting_input && square == Square::Empty,
                line.is_some_and(|l| l.contains(&position)),
            )
        });

        Self {
            cells,
            status: Status::of(game),
            accepting_input,
        }
    }

    /// Rows of three cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }
}
