//! Application state and input handling.

use crate::input::move_cursor;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use noughts_engine::{Engine, GameStatus, Position};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    cursor: Position,
    status_message: String,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let engine = Engine::new();
        let status_message = describe(&engine);
        Self {
            engine,
            cursor: Position::Center,
            status_message,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Screen areas of the nine cells from the last render, in index order.
    pub fn cell_areas(&self) -> &[Rect; 9] {
        &self.cell_areas
    }

    /// Records where the cells were drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_digit(c) {
                    self.select(pos);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Handles a mouse event; a left click selects the cell under the pointer.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.cell_at(mouse.column, mouse.row) {
            Some(pos) => self.select(pos),
            None => debug!("Click outside the board"),
        }
    }

    /// Finds the cell drawn at a terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cell_areas
            .iter()
            .position(|r| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .and_then(Position::from_index)
    }

    /// Selects a cell: plays it, or starts a new game if the last one ended.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) {
        let status = self.engine.select(pos.to_index());
        debug!(?status, "Cell selected");
        self.cursor = pos;
        self.status_message = describe(&self.engine);
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.status_message = describe(&self.engine);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(engine: &Engine) -> String {
    match engine.status() {
        GameStatus::InProgress => format!("{} to move", engine.turn()),
        GameStatus::Won { winner, line } => {
            format!("{} wins ({})! Select any cell for a new game.", winner, line)
        }
        GameStatus::Draw => "Draw! Select any cell for a new game.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts_engine::{Cell, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.engine().board().get(Position::TopLeft), Cell::Marked(Player::X));
        assert_eq!(app.status_message(), "O to move");
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_zero_ignored() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('0'));
        assert!(app.engine().history().is_empty());
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().board().get(Position::TopRight), Cell::Marked(Player::X));
    }

    #[test]
    fn test_release_ignored() {
        let mut app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(app.engine().history().is_empty());
    }

    #[test]
    fn test_win_message_and_new_game_on_select() {
        let mut app = App::new();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(
            app.status_message(),
            "X wins (Top-left, Top-center, Top-right)! Select any cell for a new game."
        );

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.engine(), &Engine::new());
        assert_eq!(app.status_message(), "X to move");
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert!(app.engine().history().is_empty());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_cell_at() {
        let mut app = App::new();
        let mut areas = [Rect::default(); 9];
        for (i, area) in areas.iter_mut().enumerate() {
            let (row, col) = (i as u16 / 3, i as u16 % 3);
            *area = Rect::new(col * 10, row * 4, 9, 3);
        }
        app.set_cell_areas(areas);
        assert_eq!(app.cell_at(0, 0), Some(Position::TopLeft));
        assert_eq!(app.cell_at(25, 9), Some(Position::BottomRight));
        assert_eq!(app.cell_at(9, 0), None);
        assert_eq!(app.cell_at(100, 100), None);
    }
}
