//! egui application state and rendering.

use crate::view::{BoardView, CellView, RESTART_LABEL};
use eframe::egui::{self, Button, Color32, RichText, Vec2};
use noughts_tictactoe::{Game, GameEvent, Player};
use tracing::debug;

const BACKGROUND: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf4);
const RESTART_FILL: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff);
const WIN_FILL: Color32 = Color32::from_rgb(0xc8, 0xf7, 0xc5);
const X_COLOR: Color32 = Color32::from_rgb(0x1f, 0x4e, 0xd8);
const O_COLOR: Color32 = Color32::from_rgb(0xd8, 0x2a, 0x2a);

const CELL_SIZE: f32 = 88.0;
const CELL_GAP: f32 = 10.0;
const MARK_SIZE: f32 = 40.0;
const STATUS_SIZE: f32 = 22.0;

/// Desktop application: owns the game and turns clicks into [`GameEvent`]s.
#[derive(Debug, Default)]
pub struct NoughtsApp {
    game: Game,
}

impl NoughtsApp {
    /// Creates the app with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies an event collected during the last frame and asks for a redraw.
    pub fn handle(&mut self, ctx: &egui::Context, event: GameEvent) {
        debug!(?event, "Handling UI event");
        self.game.dispatch(event);
        ctx.request_repaint();
    }

    /// Draws the whole window, returning the event the user triggered, if any.
    fn show(&self, ui: &mut egui::Ui) -> Option<GameEvent> {
        let view = BoardView::of(&self.game);
        let mut event = None;

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(
                RichText::new(view.status().to_string())
                    .size(STATUS_SIZE)
                    .color(Color32::BLACK),
            );
            ui.add_space(16.0);

            let board_width = 3.0 * CELL_SIZE + 2.0 * CELL_GAP;
            ui.allocate_ui(Vec2::new(board_width, board_width), |ui| {
                egui::Grid::new("board")
                    .spacing([CELL_GAP, CELL_GAP])
                    .show(ui, |ui| {
                        for row in view.rows() {
                            for cell in row {
                                if ui.add_enabled(*cell.clickable(), cell_button(cell)).clicked() {
                                    event = Some(GameEvent::Cell(cell.position().index()));
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(20.0);
            let restart = Button::new(RichText::new(RESTART_LABEL).size(16.0).color(Color32::WHITE))
                .fill(RESTART_FILL)
                .min_size(Vec2::new(160.0, 40.0));
            if ui.add(restart).clicked() {
                event = Some(GameEvent::Restart);
            }
        });

        event
    }
}

fn cell_button(cell: &CellView) -> Button<'static> {
    let color = match cell.mark() {
        Some(Player::X) => X_COLOR,
        Some(Player::O) => O_COLOR,
        None => Color32::BLACK,
    };
    let fill = if *cell.highlighted() {
        WIN_FILL
    } else {
        Color32::WHITE
    };
    Button::new(RichText::new(cell.label()).size(MARK_SIZE).strong().color(color))
        .fill(fill)
        .min_size(Vec2::splat(CELL_SIZE))
}

impl eframe::App for NoughtsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel = egui::CentralPanel::default().frame(egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND));
        let event = panel.show(ctx, |ui| self.show(ui)).inner;
        if let Some(event) = event {
            self.handle(ctx, event);
        }
    }
}
