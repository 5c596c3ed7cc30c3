//! Game status and winning lines.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Three cells that win the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The positions making up the line.
    pub fn positions(self) -> [Position; 3] {
        self.0
    }

    /// Row-major indices of the line's cells.
    pub fn indices(self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the position is part of this line.
    pub fn contains(self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}, {}, {}", a, b, c)
    }
}

/// Every winning line, in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = {
    use Position::*;
    [
        // Rows
        Line([TopLeft, TopCenter, TopRight]),
        Line([MiddleLeft, Center, MiddleRight]),
        Line([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        Line([TopLeft, MiddleLeft, BottomLeft]),
        Line([TopCenter, Center, BottomCenter]),
        Line([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        Line([TopLeft, Center, BottomRight]),
        Line([TopRight, Center, BottomLeft]),
    ]
};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won {
        /// Player who completed the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => write!(f, "{} wins ({})", winner, line),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
