//! Terminal setup and the event loop.

use crate::{App, Cli, ui};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip_all, fields(mouse = !cli.no_mouse))]
pub fn run(cli: &Cli) -> Result<()> {
    info!("Starting noughts");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if !cli.no_mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to capture mouse")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop failed");
    }
    info!("Exiting noughts");
    res
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
}
