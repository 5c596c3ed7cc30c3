//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so arbitrary boards can be evaluated without replaying moves.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board: the first winning line, else a draw when full, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
