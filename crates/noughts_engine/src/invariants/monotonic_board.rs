//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, Cell, Engine};

/// Invariant: board cells are never overwritten.
///
/// Replaying the history onto an empty board must only ever mark free cells
/// and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Engine> for MonotonicBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if !reconstructed.is_free(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Marked(mov.player));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
