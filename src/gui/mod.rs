//! Desktop frontend built on eframe/egui.

mod app;

pub use app::NoughtsApp;

use crate::view::TITLE;
use anyhow::{Result, anyhow};
use eframe::egui;
use tracing::{info, instrument};

/// Opens the game window and blocks until it is closed.
#[instrument]
pub fn run_gui(width: f32, height: f32) -> Result<()> {
    info!("Starting desktop frontend");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([width, height])
            .with_min_inner_size([260.0, 340.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Ok(Box::<NoughtsApp>::default())),
    )
    .map_err(|e| anyhow!("Desktop frontend failed: {e}"))?;

    info!("Window closed");
    Ok(())
}
