//! Noughts - two-player terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, init_tracing, run};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli)?;
    run(&cli)
}
