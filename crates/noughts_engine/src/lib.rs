//! Pure tic-tac-toe board engine.
//!
//! The [`Engine`] owns one game: a row-major 3x3 [`Board`], the [`Player`]
//! to move, the [`GameStatus`] and the move history. Every accepted move is
//! followed by an evaluation of the eight winning [`LINES`] and the draw
//! condition.
//!
//! Invalid input is expected from a click-driven front end and is ignored
//! by [`Engine::apply_move`]; [`Engine::try_apply_move`] reports the reason
//! as a [`MoveError`] instead.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Engine, GameStatus, Player};
//!
//! let mut engine = Engine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index);
//! }
//! let status = engine.apply_move(2);
//! assert_eq!(status.winner(), Some(Player::X));
//! assert_eq!(status.line().map(|l| l.indices()), Some([0, 1, 2]));
//! assert!(matches!(status, GameStatus::Won { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::Engine;
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use position::Position;
pub use status::{GameStatus, LINES, Line};
pub use types::{Board, Cell, Player};
