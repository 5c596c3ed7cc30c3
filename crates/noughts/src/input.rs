//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_engine::Position;

/// Moves the cursor for arrow keys and `hjkl`, stopping at the board edge.
///
/// Any other key leaves the cursor where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());

    let (row, column) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, column.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (column + 1).min(2)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), column),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), column),
        _ => (row, column),
    };

    Position::from_row_col(row, column).unwrap_or(cursor)
}
