//! noughts - unified CLI
//!
//! Opens the desktop window by default, or the terminal frontend with `tui`.

use anyhow::Result;
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{gui, telemetry, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Gui { width, height } => {
            telemetry::init_stderr(&cli.log_level);
            gui::run_gui(width, height)
        }
        Command::Tui { log_file } => tui::run_tui(&cli.log_level, &log_file),
    }
}
