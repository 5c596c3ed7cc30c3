//! Core domain types for the board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (moves first).
    #[default]
    #[display("X")]
    X,
    /// Player O (moves second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Free,
    /// Cell carries a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Free => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Returns true if no mark has been placed.
    pub fn is_free(self) -> bool {
        self == Cell::Free
    }
}

/// 3x3 board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cell contents.
    ///
    /// Used to evaluate arbitrary positions; the engine itself only ever
    /// builds boards one mark at a time.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is free.
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_free()
    }

    /// Returns true once every cell carries a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_free())
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_free()).count()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a compact human-readable string.
    ///
    /// Free cells show their keypad digit (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                result.push_str("\n-+-+-\n");
            } else if idx % 3 != 0 {
                result.push('|');
            }
            match cell {
                Cell::Free => result.push_str(&(idx + 1).to_string()),
                Cell::Marked(player) => result.push_str(&player.to_string()),
            }
        }
        result
    }
}
