//! noughts - two-player tic-tac-toe
//!
//! The game itself lives in [`noughts_tictactoe`]; this crate puts it on
//! screen.
//!
//! # Architecture
//!
//! - **View**: frontend-neutral snapshot of a game ([`view::BoardView`])
//! - **GUI**: desktop window (eframe/egui)
//! - **TUI**: terminal frontend (ratatui/crossterm) with mouse and keyboard
//! - **CLI**: frontend selection and log settings
//!
//! Every frontend owns a [`Game`] and feeds it [`GameEvent`]s; nothing runs
//! concurrently.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod gui;
pub mod telemetry;
pub mod tui;
pub mod view;

// Crate-level exports - Game types (tic-tac-toe)
pub use noughts_tictactoe::{Game, GameEvent, Outcome, Placement, Player, Position};
