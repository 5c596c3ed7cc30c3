//! Kani proof harnesses for the engine invariants.
//!
//! Bounded model checking over arbitrary index sequences, including
//! out-of-range and repeated indices.

use super::{EngineInvariants, InvariantSet};
use crate::Engine;

/// Any sequence of up to five selections leaves every invariant intact.
#[kani::proof]
#[kani::unwind(6)]
fn verify_invariants_after_arbitrary_moves() {
    let mut engine = Engine::new();
    for _ in 0..5 {
        let index: u8 = kani::any();
        engine.apply_move(index as usize);
    }
    assert!(EngineInvariants::check_all(&engine).is_ok());
}

/// A rejected move never changes the engine.
#[kani::proof]
#[kani::unwind(4)]
fn verify_rejected_move_is_noop() {
    let mut engine = Engine::new();
    let first: u8 = kani::any();
    kani::assume(first < 9);
    engine.apply_move(first as usize);

    let before = engine.clone();
    let index: u8 = kani::any();
    if engine.try_apply_move(index as usize).is_err() {
        assert!(engine == before);
    }
}
