//! The board engine: owns one game and applies moves to it.

use super::action::{Move, MoveError};
use super::{rules, Board, Cell, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe board engine.
///
/// Holds the board, the player to move, the status and the move history of
/// the current game. The board only changes through [`Engine::apply_move`]
/// (or its checked and click-style variants) and [`Engine::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Engine {
    /// Creates an engine holding a fresh game with X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds an engine by playing positions in order.
    ///
    /// Stops at the first move that would be rejected.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for pos in positions {
            engine.try_apply_move(pos.to_index())?;
        }
        Ok(engine)
    }

    /// Starts a new game: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Starting new game");
        *self = Self::new();
    }

    /// Applies a move for the current player.
    ///
    /// Out-of-range indices, occupied cells and moves after the game ended
    /// are ignored. Returns the status after the call.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> GameStatus {
        match self.try_apply_move(index) {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                self.status
            }
        }
    }

    /// Applies a move for the current player, reporting why it was rejected.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_free(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.turn;
        self.board.set(position, Cell::Marked(player));
        self.history.push(Move::new(player, position));
        self.status = rules::evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => {
                self.turn = player.opponent();
                debug!(%player, %position, "Move accepted");
            }
            GameStatus::Won { winner, line } => {
                info!(%winner, %line, moves = self.history.len(), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(self.status)
    }

    /// Handles a cell being selected by the player.
    ///
    /// While the game is running this is [`Engine::apply_move`]. Once the
    /// game has ended, any selection starts a new game instead and places
    /// no mark.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> GameStatus {
        if self.status.is_over() {
            self.reset();
            self.status
        } else {
            self.apply_move(index)
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// After the game ends this stays on the player who made the final move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Positions still open for play. Empty once the game is over.
    pub fn free_positions(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::free(&self.board)
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{InvariantSet, EngineInvariants};

        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in violations {
                tracing::warn!(description = %violation.description, "Invariant violated");
            }
        }
    }
}
