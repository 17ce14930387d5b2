//! Tic-tac-toe game state and rules.
//!
//! - [`Game`] holds the board and the active player and applies moves.
//! - [`Outcome`] is derived from the board on demand, never stored.
//! - [`rules`] has the pure win and draw predicates.
//! - [`GameEvent`] feeds frontend input into [`Game::dispatch`].
//!
//! ```
//! use noughts_tictactoe::{Game, GameEvent, Outcome, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.dispatch(GameEvent::Cell(index));
//! }
//! assert_eq!(game.evaluate(), Outcome::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod event;
mod game;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use event::GameEvent;
pub use game::{Game, Ignored, Placement};
pub use outcome::Outcome;
pub use position::{Position, PositionError};
pub use types::{Board, Player, Square};
