//! Terminal frontend built on ratatui and crossterm.

mod app;
mod input;
mod terminal_guard;
mod ui;

pub use app::{Transition, TuiApp};
pub use input::{digit_position, move_cursor};
pub use terminal_guard::TerminalGuard;
pub use ui::{Hit, ScreenLayout, draw};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{error, info, instrument, warn};

use crate::telemetry;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal frontend until the player quits.
pub fn run_tui(log_level: &str, log_file: &Path) -> Result<()> {
    telemetry::init_file(log_level, log_file)?;
    info!("Starting terminal frontend");

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = TuiApp::new();
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    guard.restore();

    info!(moves = app.game().move_count(), "Terminal frontend stopped");
    res
}

/// Enters raw mode and the alternate screen.
///
/// The returned guard undoes both as soon as raw mode is on, so a failure
/// later in setup, an early return or a panic still leaves a usable shell.
fn setup_terminal() -> Result<(CrosstermTerminal, TerminalGuard)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::with_cleanup(restore_terminal);
    guard.install_panic_hook();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok((terminal, guard))
}

/// Best effort: every step runs even if an earlier one fails.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Draw, wait for one input, apply it; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut CrosstermTerminal, app: &mut TuiApp) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let transition = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => Transition::Continue,
        };

        if transition == Transition::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
