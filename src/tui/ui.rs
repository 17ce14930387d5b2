//! Stateless terminal rendering.
//!
//! [`draw`] returns the [`ScreenLayout`] it used so mouse clicks can be
//! mapped back onto cells and the restart button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::view::{BoardView, CellView, RESTART_LABEL, TITLE};
use noughts_tictactoe::{Player, Position};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BUTTON_WIDTH: u16 = 20;

/// Where each interactive element was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Status box.
    pub status: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Restart button.
    pub restart: Rect,
    /// Key help line.
    pub help: Rect,
}

/// Element under a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// The restart button.
    Restart,
}

impl ScreenLayout {
    /// Splits the terminal area into title, status, board, button and help.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Title
                Constraint::Length(3),            // Status
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Restart
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
        });

        Self {
            title: chunks[0],
            status: center_rect(chunks[1], BOARD_WIDTH, 3),
            cells,
            restart: center_rect(chunks[3], BUTTON_WIDTH, 3),
            help: chunks[4],
        }
    }

    /// Finds the element at a terminal column and row.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let point = ScreenPosition::new(column, row);
        if self.restart.contains(point) {
            return Some(Hit::Restart);
        }
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.index()].contains(point))
            .map(Hit::Cell)
    }
}

/// Renders the whole screen with the keyboard cursor on `cursor`.
pub fn draw(frame: &mut Frame, view: &BoardView, cursor: Position) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let status_color = if *view.accepting_input() {
        Color::Yellow
    } else {
        Color::Green
    };
    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_grid_lines(frame, &layout);
    for cell in view.cells() {
        let show_cursor = *view.accepting_input() && *cell.position() == cursor;
        draw_cell(frame, layout.cells[cell.position().index()], cell, show_cursor);
    }

    let restart = Paragraph::new(RESTART_LABEL)
        .style(Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, layout.restart);

    let help = Paragraph::new("arrows/enter or 1-9: play   r: restart   q: quit   mouse: click")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, show_cursor: bool) {
    let (symbol, base_style) = match cell.mark() {
        None if *cell.clickable() => (
            (cell.position().index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (String::new(), Style::default()),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if show_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if *cell.highlighted() {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_grid_lines(frame: &mut Frame, layout: &ScreenLayout) {
    let style = Style::default().fg(Color::DarkGray);
    let top = layout.cells[Position::TopLeft.index()];
    let bottom_right = layout.cells[Position::BottomRight.index()];
    let width = (bottom_right.x + bottom_right.width).saturating_sub(top.x);

    for row in [Position::TopLeft, Position::MiddleLeft] {
        let cell = layout.cells[row.index()];
        let area = Rect::new(top.x, cell.y + cell.height, width, 1).intersection(frame.area());
        frame.render_widget(Paragraph::new("─".repeat(width as usize)).style(style), area);
    }

    for col in [Position::TopLeft, Position::TopCenter] {
        let cell = layout.cells[col.index()];
        let height = (bottom_right.y + bottom_right.height).saturating_sub(top.y);
        let area = Rect::new(cell.x + cell.width, top.y, 1, height).intersection(frame.area());
        let bar = vec![Line::from("│"); height as usize];
        frame.render_widget(Paragraph::new(bar).style(style), area);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
