//! Tests for the terminal frontend, rendered into ratatui's TestBackend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts::tui::{Transition, TuiApp};
use noughts::{Outcome, Player, Position};
use ratatui::{Terminal, backend::TestBackend};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

fn render(terminal: &mut Terminal<TestBackend>, app: &mut TuiApp) -> String {
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click_cell(terminal: &mut Terminal<TestBackend>, app: &mut TuiApp, pos: Position) {
    render(terminal, app);
    let rect = app.layout().unwrap().cells[pos.index()];
    assert_eq!(app.handle_mouse(left_click(rect.x + 1, rect.y + 1)), Transition::Continue);
}

#[test]
fn test_initial_screen() {
    let mut terminal = terminal();
    let mut app = TuiApp::new();
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Tic-Tac-Toe"));
    assert!(screen.contains("Player X's Turn"));
    assert!(screen.contains("Restart Game"));
}

#[test]
fn test_mouse_plays_to_a_win() {
    let mut terminal = terminal();
    let mut app = TuiApp::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        click_cell(&mut terminal, &mut app, pos);
    }
    assert_eq!(app.game().evaluate(), Outcome::Won(Player::X));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Player X Wins!"));

    // Clicks after the game is decided are ignored
    let before = app.game().clone();
    click_cell(&mut terminal, &mut app, Position::BottomRight);
    assert_eq!(app.game(), &before);
}

#[test]
fn test_mouse_restart_button() {
    let mut terminal = terminal();
    let mut app = TuiApp::new();
    click_cell(&mut terminal, &mut app, Position::Center);

    let restart = app.layout().unwrap().restart;
    app.handle_mouse(left_click(restart.x + 2, restart.y + 1));
    assert_eq!(app.game().move_count(), 0);
    assert_eq!(app.game().to_move(), Player::X);
}

#[test]
fn test_right_click_ignored() {
    let mut terminal = terminal();
    let mut app = TuiApp::new();
    render(&mut terminal, &mut app);
    let rect = app.layout().unwrap().cells[0];
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..left_click(rect.x + 1, rect.y + 1)
    };
    app.handle_mouse(click);
    assert_eq!(app.game().move_count(), 0);
}

#[test]
fn test_keyboard_cursor_and_digits() {
    let mut app = TuiApp::new();
    assert_eq!(app.cursor(), Position::Center);

    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.cursor(), Position::TopLeft);
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.game().move_count(), 1);

    // Same square again: ignored
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.game().move_count(), 1);

    app.handle_key(key(KeyCode::Char('9')));
    assert_eq!(app.cursor(), Position::BottomRight);
    assert_eq!(app.game().move_count(), 2);
    assert_eq!(app.game().to_move(), Player::X);

    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.game().move_count(), 0);
}

#[test]
fn test_quit_keys() {
    let mut app = TuiApp::new();
    assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Transition::Quit);
    assert_eq!(app.handle_key(key(KeyCode::Esc)), Transition::Quit);
    assert_eq!(
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Transition::Quit
    );
    assert_eq!(app.handle_key(key(KeyCode::Char('x'))), Transition::Continue);
}
