//! Input events and the central update function.
//!
//! Frontends translate clicks and key presses into [`GameEvent`]s and hand
//! them to [`Game::dispatch`]; nothing else mutates the game.

use crate::Game;
use crate::game::Placement;
use tracing::instrument;

/// Something the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// A cell was clicked, by row-major index (0-8).
    Cell(usize),
    /// The restart control was activated.
    Restart,
}

impl Game {
    /// Applies one event to the game.
    ///
    /// Returns the placement for cell events and `None` for a restart.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> Option<Placement> {
        match event {
            GameEvent::Cell(index) => Some(self.apply_move(index)),
            GameEvent::Restart => {
                self.reset();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_cell_event_places_mark() {
        let mut game = Game::new();
        let placement = game.dispatch(GameEvent::Cell(8));
        assert_eq!(placement, Some(Placement::Placed(Position::BottomRight)));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_restart_event_resets() {
        let mut game = Game::new();
        game.dispatch(GameEvent::Cell(0));
        game.dispatch(GameEvent::Cell(1));
        assert_eq!(game.dispatch(GameEvent::Restart), None);
        assert_eq!(game, Game::new());
    }
}
