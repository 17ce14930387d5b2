//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe on the desktop or in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Frontend to run (defaults to the desktop window)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available frontends
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open the desktop window
    Gui {
        /// Initial window width in points
        #[arg(long, default_value_t = 360.0)]
        width: f32,

        /// Initial window height in points
        #[arg(long, default_value_t = 460.0)]
        height: f32,
    },

    /// Play in the terminal
    Tui {
        /// File that receives log output while the terminal is in use
        #[arg(long, default_value = "noughts_tui.log")]
        log_file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Gui {
            width: 360.0,
            height: 460.0,
        }
    }
}
