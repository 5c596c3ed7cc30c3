//! Two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`noughts_engine`]; this crate is the front end:
//! it draws the board with ratatui, turns keys and mouse clicks into cell
//! selections, and highlights the outcome.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod logging;
mod tui;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use logging::init_tracing;
pub use tui::run;
