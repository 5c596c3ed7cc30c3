//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File receiving log output (the terminal itself is taken by the UI)
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Do not capture the mouse; play with the keyboard only
    #[arg(long)]
    pub no_mouse: bool,
}
