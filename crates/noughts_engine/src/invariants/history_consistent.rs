//! History consistency invariant: history length matches marked cells.

use super::Invariant;
use crate::Engine;

/// Invariant: history length equals the number of marked cells.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.history().len() == engine.board().marked_count()
    }

    fn description() -> &'static str {
        "History length matches number of marked cells"
    }
}
