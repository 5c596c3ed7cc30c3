//! UI rendering using ratatui.

use crate::App;
use noughts_engine::{Cell, Engine, GameStatus, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Background of the winning line.
pub const WIN_COLOR: Color = Color::Green;
/// Background of every cell after a draw.
pub const DRAW_COLOR: Color = Color::Rgb(255, 165, 0);

/// Draws the main UI and records where each cell landed.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let areas = draw_board(f, chunks[1], app.engine(), app.cursor());
    app.set_cell_areas(areas);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 or arrows + Enter: play | Click: play | r: new game | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn draw_board(f: &mut Frame, area: Rect, engine: &Engine, cursor: Position) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for column in 0..3 {
            let Some(pos) = Position::from_row_col(row, column) else {
                continue;
            };
            let cell_area = cols[column * 2];
            draw_cell(f, cell_area, engine, cursor, pos);
            areas[pos.to_index()] = cell_area;
        }
        draw_separator_vertical(f, cols[1]);
        draw_separator_vertical(f, cols[3]);

        if row < 2 {
            draw_separator(f, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell(f: &mut Frame, area: Rect, engine: &Engine, cursor: Position, pos: Position) {
    let (symbol, mark_style) = match engine.board().get(pos) {
        Cell::Free => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let background = match engine.status() {
        GameStatus::Won { line, .. } if line.contains(pos) => Style::default().bg(WIN_COLOR),
        GameStatus::Draw => Style::default().bg(DRAW_COLOR),
        GameStatus::InProgress if pos == cursor => {
            Style::default().add_modifier(Modifier::REVERSED)
        }
        _ => Style::default(),
    };

    let text = vec![
        Line::default(),
        Line::from(Span::styled(symbol, mark_style)),
        Line::default(),
    ];
    let paragraph = Paragraph::new(text)
        .style(background)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn draw_separator_vertical(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// The cell holding the symbol in the middle of a board cell.
    fn center_of<'a>(buffer: &'a Buffer, area: Rect) -> &'a ratatui::buffer::Cell {
        &buffer[(area.x + area.width / 2, area.y + area.height / 2)]
    }

    #[test]
    fn test_cells_laid_out_row_major() {
        let mut app = App::new();
        render(&mut app);
        let areas = app.cell_areas();
        for area in areas {
            assert_eq!((area.width, area.height), (CELL_WIDTH, CELL_HEIGHT));
        }
        assert!(areas[0].x < areas[1].x && areas[1].x < areas[2].x);
        assert_eq!(areas[0].y, areas[2].y);
        assert!(areas[0].y < areas[3].y && areas[3].y < areas[6].y);
    }

    #[test]
    fn test_free_cells_show_digits() {
        let mut app = App::new();
        let buffer = render(&mut app);
        for (i, area) in app.cell_areas().iter().enumerate() {
            assert_eq!(center_of(&buffer, *area).symbol(), (i + 1).to_string());
        }
    }

    #[test]
    fn test_winning_line_highlighted() {
        let mut app = App::new();
        for pos in [0, 3, 1, 4, 2] {
            app.select(Position::ALL[pos]);
        }
        let buffer = render(&mut app);
        let areas = *app.cell_areas();

        for i in [0, 1, 2] {
            let cell = center_of(&buffer, areas[i]);
            assert_eq!(cell.symbol(), "X");
            assert_eq!(cell.bg, WIN_COLOR);
            assert_eq!(cell.fg, Color::Blue);
        }
        for i in [3, 4] {
            let cell = center_of(&buffer, areas[i]);
            assert_eq!(cell.symbol(), "O");
            assert_ne!(cell.bg, WIN_COLOR);
        }
    }

    #[test]
    fn test_draw_highlights_every_cell() {
        let mut app = App::new();
        for pos in [0, 2, 1, 3, 5, 4, 6, 8, 7] {
            app.select(Position::ALL[pos]);
        }
        assert_eq!(app.engine().status(), GameStatus::Draw);
        let buffer = render(&mut app);
        for area in app.cell_areas() {
            assert_eq!(center_of(&buffer, *area).bg, DRAW_COLOR);
        }
    }
}
