//! Named board positions.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board.
///
/// Discriminants are the row-major cell index (`column + row * 3`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft = 0,
    /// Top-center (index 1)
    TopCenter = 1,
    /// Top-right (index 2)
    TopRight = 2,
    /// Middle-left (index 3)
    MiddleLeft = 3,
    /// Center (index 4)
    Center = 4,
    /// Middle-right (index 5)
    MiddleRight = 5,
    /// Bottom-left (index 6)
    BottomLeft = 6,
    /// Bottom-center (index 7)
    BottomCenter = 7,
    /// Bottom-right (index 8)
    BottomRight = 8,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a row and column, both 0-2.
    pub fn from_row_col(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(column + row * 3)
        } else {
            None
        }
    }

    /// Creates position from a keypad digit, `'1'` being top-left.
    pub fn from_digit(c: char) -> Option<Self> {
        match c.to_digit(10) {
            Some(d @ 1..=9) => Self::from_index(d as usize - 1),
            _ => None,
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Filters positions by board state - returns only free cells.
    #[instrument(skip(board))]
    pub fn free(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_free(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
