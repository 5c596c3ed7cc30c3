//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Engine, Player};

/// Invariant: players alternate turns, starting with X.
///
/// While the game is running the player to move is the opponent of the last
/// mover; once it has ended, the turn stays with the player who ended it.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        let Some(last) = history.last() else {
            return engine.turn() == Player::X;
        };

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, m)| m.player == if i % 2 == 0 { Player::X } else { Player::O });

        let expected_turn = if engine.is_over() {
            last.player
        } else {
            last.player.opponent()
        };

        alternates && engine.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
