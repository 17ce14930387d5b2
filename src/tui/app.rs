//! Terminal application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts_tictactoe::{Game, GameEvent, Position};
use ratatui::Frame;
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};
use super::ui::{self, Hit, ScreenLayout};
use crate::view::BoardView;

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Continue,
    /// Leave the terminal frontend.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct TuiApp {
    game: Game,
    cursor: Position,
    layout: Option<ScreenLayout>,
}

impl TuiApp {
    /// Creates a new application with the cursor in the center.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            layout: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Layout used by the last render, if any.
    pub fn layout(&self) -> Option<&ScreenLayout> {
        self.layout.as_ref()
    }

    /// Draws the screen and remembers where everything went.
    pub fn render(&mut self, frame: &mut Frame) {
        let view = BoardView::of(&self.game);
        self.layout = Some(ui::draw(frame, &view, self.cursor));
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Transition::Quit;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Transition::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.dispatch(GameEvent::Restart),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(GameEvent::Cell(self.cursor.index()));
            }
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.dispatch(GameEvent::Cell(pos.index()));
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
        Transition::Continue
    }

    /// Handles a mouse event; only left-button presses do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Transition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Transition::Continue;
        }
        match self.layout.and_then(|l| l.hit(mouse.column, mouse.row)) {
            Some(Hit::Cell(pos)) => {
                self.cursor = pos;
                self.dispatch(GameEvent::Cell(pos.index()));
            }
            Some(Hit::Restart) => self.dispatch(GameEvent::Restart),
            None => debug!(column = mouse.column, row = mouse.row, "Click outside controls"),
        }
        Transition::Continue
    }

    fn dispatch(&mut self, event: GameEvent) {
        debug!(?event, "Dispatching");
        self.game.dispatch(event);
        if event == GameEvent::Restart {
            self.cursor = Position::Center;
        }
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
